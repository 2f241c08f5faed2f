use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether a file could just be created in the run-workspace root.
    pub run_dir_writable: bool,
}

/// GET /health -- returns service and workspace health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let run_dir = &state.config.workspace.run_dir;
    let run_dir_writable = match check_writable(run_dir).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %run_dir.display(), error = %e, "Run directory not writable");
            false
        }
    };

    let status = if run_dir_writable { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        run_dir_writable,
    })
}

/// Create and delete a scratch file in `dir`.
///
/// The `~` keeps the name outside the run-name alphabet, so it never collides
/// with a run directory.
async fn check_writable(dir: &Path) -> std::io::Result<()> {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let n = SEQ.fetch_add(1, Ordering::Relaxed);
    let path = dir.join(format!(".health~{}-{n}", std::process::id()));

    tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await?;
    tokio::fs::remove_file(&path).await
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
