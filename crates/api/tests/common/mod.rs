#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pfred_api::app::build_app;
use pfred_api::config::ServerConfig;
use pfred_api::state::AppState;
use pfred_core::workspace::WorkspaceConfig;

/// Temporary run-workspace root and script library for one test.
///
/// Both directories are deleted when the value is dropped.
pub struct TestWorkspace {
    pub runs: tempfile::TempDir,
    pub scripts: tempfile::TempDir,
    pub command_timeout: Duration,
    pub precomputed_species: Vec<String>,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            runs: tempfile::tempdir().expect("create runs dir"),
            scripts: tempfile::tempdir().expect("create scripts dir"),
            command_timeout: Duration::from_secs(10),
            precomputed_species: vec![],
        }
    }

    /// Install an executable bash script named `name` in the script library.
    pub fn script(&self, name: &str, body: &str) -> &Self {
        let path = self.scripts.path().join(name);
        std::fs::write(&path, format!("#!/bin/bash\n{body}")).expect("write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");
        self
    }

    pub fn run_path(&self, run: &str) -> PathBuf {
        self.runs.path().join(run)
    }

    /// Build a test `ServerConfig` pointing at this workspace.
    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["http://localhost:3000".to_string()],
            request_timeout_secs: 30,
            workspace: WorkspaceConfig {
                run_dir: self.runs.path().to_path_buf(),
                scripts_dir: self.scripts.path().to_path_buf(),
                command_timeout: self.command_timeout,
                max_result_bytes: 1024 * 1024,
                precomputed_species: self.precomputed_species.clone(),
            },
        }
    }

    /// Build the full application router, the same one `main.rs` serves.
    pub fn app(&self) -> Router {
        build_app(AppState::new(self.config()))
    }
}

/// Write `contents` to `dir/name`, creating `dir` if needed.
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    std::fs::create_dir_all(dir).expect("create dir");
    std::fs::write(dir.join(name), contents).expect("write file");
}

/// Issue a GET request against the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    app.oneshot(request).await.expect("router is infallible")
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}
