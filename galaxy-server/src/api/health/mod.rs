//! Health & Diagnostic API
//!
//! Routes:
//! - `GET /api/health` - liveness probe (status, version, uptime)
//! - `GET /api/diagnostic` - environment, database and upload dir checks

use std::sync::OnceLock;
use std::time::{Instant, SystemTime};

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use shared::util::now_millis;

static START_TIME: OnceLock<SystemTime> = OnceLock::new();

/// Record process start. Called once from server startup; uptime reads
/// fall back to "now" (zero uptime) if it was never set.
pub fn mark_started() {
    let _ = START_TIME.set(SystemTime::now());
}

fn uptime_seconds() -> u64 {
    START_TIME
        .get()
        .and_then(|start| SystemTime::now().duration_since(*start).ok())
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub port: u16,
    pub uptime_seconds: u64,
    pub checks: DiagnosticChecks,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticChecks {
    pub database: CheckResult,
    pub uploads: CheckResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResult {
    fn ok_with_latency(latency_ms: u64) -> Self {
        Self {
            status: "ok".to_string(),
            latency_ms: Some(latency_ms),
            message: None,
        }
    }

    fn ok_with_message(message: String) -> Self {
        Self {
            status: "ok".to_string(),
            latency_ms: None,
            message: Some(message),
        }
    }

    fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            latency_ms: None,
            message: Some(message),
        }
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/diagnostic", get(diagnostic))
}

/// GET /api/health - cheap liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime_seconds(),
        timestamp: now_millis(),
    })
}

/// GET /api/diagnostic - deeper checks for the admin dashboard
async fn diagnostic(State(state): State<ServerState>) -> Json<DiagnosticResponse> {
    let database = check_database(&state).await;
    let uploads = check_uploads(&state).await;

    let status = if database.is_ok() && uploads.is_ok() {
        "healthy"
    } else {
        "degraded"
    };

    Json(DiagnosticResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        port: state.config.http_port,
        uptime_seconds: uptime_seconds(),
        checks: DiagnosticChecks { database, uploads },
    })
}

async fn check_database(state: &ServerState) -> CheckResult {
    let started = Instant::now();
    match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(state.pool())
        .await
    {
        Ok(_) => CheckResult::ok_with_latency(started.elapsed().as_millis() as u64),
        Err(e) => CheckResult::error(format!("Database error: {e}")),
    }
}

async fn check_uploads(state: &ServerState) -> CheckResult {
    match tokio::fs::metadata(state.images.dir()).await {
        Ok(meta) if meta.is_dir() => {
            CheckResult::ok_with_message(state.images.dir().display().to_string())
        }
        Ok(_) => CheckResult::error("Upload path is not a directory".to_string()),
        Err(e) => CheckResult::error(format!("Upload directory unavailable: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_starts_at_zero_then_counts() {
        assert_eq!(uptime_seconds(), 0);
        mark_started();
        // Just started, still within the first second
        assert!(uptime_seconds() <= 1);
    }

    #[test]
    fn test_check_result_status() {
        assert!(CheckResult::ok_with_latency(3).is_ok());
        assert!(!CheckResult::error("boom".to_string()).is_ok());
    }
}
