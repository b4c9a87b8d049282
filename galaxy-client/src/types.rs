//! Client-side response types
//!
//! Mirrors of the server's diagnostic wire shapes, plus the upload
//! payload type. Entity types come from `shared::models`.

use serde::Deserialize;

/// An image file to attach to a menu item or offer
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// `GET /api/health` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfo {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: i64,
}

/// `GET /api/diagnostic` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticInfo {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub port: u16,
    pub uptime_seconds: u64,
    pub checks: DiagnosticChecks,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticChecks {
    pub database: CheckInfo,
    pub uploads: CheckInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInfo {
    pub status: String,
    #[serde(default)]
    pub latency_ms: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/upload-path` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPathInfo {
    pub path: String,
    pub public_prefix: String,
    pub exists: bool,
    pub file_count: u64,
}
