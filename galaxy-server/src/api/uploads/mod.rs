//! Uploads API
//!
//! Routes:
//! - `GET /uploads/{filename}` - serve a stored image, public access
//! - `GET /api/upload-path` - upload directory info for the admin dashboard
//!
//! Files land here through the menu-item and offer forms; there is no
//! standalone upload endpoint.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use http::header;
use serde::Serialize;

use crate::core::ServerState;

/// Stored file response
enum StoredFileResponse {
    Ok(Bytes, String),
    NotFound,
    BadRequest(&'static str),
}

impl IntoResponse for StoredFileResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            StoredFileResponse::Ok(content, mime) => (
                http::StatusCode::OK,
                [(header::CONTENT_TYPE, mime)],
                content,
            )
                .into_response(),
            StoredFileResponse::NotFound => {
                (http::StatusCode::NOT_FOUND, "File not found").into_response()
            }
            StoredFileResponse::BadRequest(msg) => {
                (http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}

/// Serve a stored image
async fn serve_stored_file(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> StoredFileResponse {
    // Security check: prevent path traversal
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return StoredFileResponse::BadRequest("Invalid filename");
    }

    let file_path = state.images.dir().join(&filename);
    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let mime = mime_guess::from_path(&filename)
                .first_or_octet_stream()
                .to_string();
            StoredFileResponse::Ok(content.into(), mime)
        }
        Err(e) => {
            tracing::debug!(filename = %filename, error = %e, "Stored file not readable");
            StoredFileResponse::NotFound
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadPathResponse {
    path: String,
    public_prefix: &'static str,
    exists: bool,
    file_count: u64,
}

/// GET /api/upload-path - where images live and how many there are
async fn upload_path_info(State(state): State<ServerState>) -> Json<UploadPathResponse> {
    let dir = state.images.dir();
    let (exists, file_count) = count_files(dir).await;
    Json(UploadPathResponse {
        path: dir.display().to_string(),
        public_prefix: "/uploads",
        exists,
        file_count,
    })
}

async fn count_files(dir: &std::path::Path) -> (bool, u64) {
    let Ok(mut entries) = tokio::fs::read_dir(dir).await else {
        return (false, 0);
    };
    let mut count = 0;
    while let Ok(Some(entry)) = entries.next_entry().await {
        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false);
        if is_file {
            count += 1;
        }
    }
    (true, count)
}

pub fn router() -> Router<ServerState> {
    Router::new()
        // Serve stored images - public access
        .route("/uploads/{filename}", get(serve_stored_file))
        .route("/api/upload-path", get(upload_path_info))
}
