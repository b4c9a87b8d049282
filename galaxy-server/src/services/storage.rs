//! Image Storage Service
//!
//! Validates and persists uploaded images under the configured upload
//! directory and hands out their public `/uploads/<filename>` paths.

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::utils::AppError;

/// Maximum accepted image size (10MB)
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Accepted image extensions
pub const SUPPORTED_FORMATS: &[&str] = &["jpg", "jpeg", "png", "gif"];

#[derive(Clone, Debug)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Open the store, creating the directory if missing.
    pub fn new(dir: &str) -> Result<Self, AppError> {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)
            .map_err(|e| AppError::Internal(format!("Failed to create upload dir: {e}")))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Validate and persist one uploaded file, returning its public path.
    pub async fn save(
        &self,
        field: &str,
        original_name: &str,
        data: &[u8],
    ) -> Result<String, AppError> {
        if data.is_empty() {
            return Err(AppError::Validation("Empty file provided".into()));
        }
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::Validation(format!(
                "File too large. Maximum size is {}MB",
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }

        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| {
                AppError::Validation(format!("Invalid file extension for: {original_name}"))
            })?;
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(AppError::Validation(format!(
                "Unsupported file format '{}'. Supported: {}",
                ext,
                SUPPORTED_FORMATS.join(", ")
            )));
        }

        let filename = unique_filename(field, &ext);
        let path = self.dir.join(&filename);
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to save file: {e}")))?;

        tracing::info!(filename = %filename, size = data.len(), "Image stored");
        Ok(format!("/uploads/{filename}"))
    }

    /// Delete the file behind a public path, if it is one of ours.
    /// External URLs and anything marked "placeholder" are left alone.
    /// Failures are logged, not returned.
    pub async fn remove(&self, public_path: &str) {
        let Some(filename) = public_path.strip_prefix("/uploads/") else {
            return;
        };
        if public_path.contains("placeholder") {
            return;
        }
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return;
        }

        let path = self.dir.join(filename);
        if let Err(e) = tokio::fs::remove_file(&path).await
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove stored image");
        }
    }
}

/// `<field>-<millis>-<random9>.<ext>`; collision safety comes from the
/// timestamp plus the random suffix.
fn unique_filename(field: &str, ext: &str) -> String {
    let millis = shared::util::now_millis();
    let random: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("{field}-{millis}-{random:09}.{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, ImageStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().to_str().unwrap()).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_public_path() {
        let (_dir, store) = store();
        let path = store.save("image", "pizza.JPG", b"fakejpegdata").await.unwrap();

        assert!(path.starts_with("/uploads/image-"));
        assert!(path.ends_with(".jpg"));

        let filename = path.strip_prefix("/uploads/").unwrap();
        assert!(store.dir().join(filename).exists());
    }

    #[tokio::test]
    async fn test_rejects_unsupported_extension() {
        let (_dir, store) = store();
        let err = store.save("image", "malware.exe", b"MZ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_rejects_missing_extension() {
        let (_dir, store) = store();
        assert!(store.save("image", "noext", b"data").await.is_err());
    }

    #[tokio::test]
    async fn test_rejects_oversized_file() {
        let (_dir, store) = store();
        let big = vec![0u8; MAX_FILE_SIZE + 1];
        let err = store.save("image", "big.png", &big).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_remove_deletes_stored_file() {
        let (_dir, store) = store();
        let path = store.save("image", "pizza.png", b"data").await.unwrap();
        let filename = path.strip_prefix("/uploads/").unwrap().to_string();

        store.remove(&path).await;
        assert!(!store.dir().join(filename).exists());
    }

    #[tokio::test]
    async fn test_remove_spares_placeholder_and_external_urls() {
        let (_dir, store) = store();
        std::fs::write(store.dir().join("placeholder-pizza.png"), b"x").unwrap();

        store.remove("/uploads/placeholder-pizza.png").await;
        assert!(store.dir().join("placeholder-pizza.png").exists());

        // Not our path prefixes, nothing happens
        store.remove("https://cdn.example.com/pizza.png").await;
        store.remove("/images/pizza.png").await;
    }

    #[tokio::test]
    async fn test_remove_ignores_traversal_attempts() {
        let (_dir, store) = store();
        let outside = store.dir().parent().unwrap().join("victim.txt");
        std::fs::write(&outside, b"keep me").unwrap();

        store.remove("/uploads/../victim.txt").await;
        assert!(outside.exists());
    }

    #[test]
    fn test_unique_filename_shape() {
        let name = unique_filename("image", "jpg");
        let parts: Vec<&str> = name.splitn(3, '-').collect();
        assert_eq!(parts[0], "image");
        assert!(parts[1].parse::<i64>().is_ok());
        assert!(name.ends_with(".jpg"));
    }
}
