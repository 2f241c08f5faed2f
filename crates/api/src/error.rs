use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pfred_core::error::CoreError;
use pfred_core::scripting::executor::ScriptError;

/// Body returned for every failed script invocation.
pub const SCRIPT_FAILED_MESSAGE: &str = "Shell command run failed";

/// Application-level error type for HTTP handlers.
///
/// Keeps the structured cause for logging while the response stays coarse:
/// every failure is `400 Bad Request` with a short plain-text message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pfred_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An external script could not be run or did not succeed.
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => msg.clone(),
                CoreError::NotFound { .. } | CoreError::TooLarge { .. } => core.to_string(),
                CoreError::Config(_) | CoreError::Io { .. } => {
                    tracing::error!(error = %core, "Internal core error");
                    "An internal error occurred".to_string()
                }
            },

            // --- Script failures ---
            AppError::Script(err) => {
                tracing::warn!(error = %err, kind = err.kind(), "Script failed");
                SCRIPT_FAILED_MESSAGE.to_string()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => msg.clone(),
        };

        (StatusCode::BAD_REQUEST, message).into_response()
    }
}
