//! Shared query parameter types and extraction helpers for API handlers.
//!
//! Parameters are declared optional in every query struct and checked here,
//! so a missing or malformed parameter yields the same plain-text 400 as any
//! other validation failure instead of the extractor's generic rejection.

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Query parameters for endpoints that only name a run (`?RunDirectory=`).
#[derive(Debug, Deserialize)]
pub struct RunParams {
    #[serde(rename = "RunDirectory")]
    pub run_directory: Option<String>,
}

/// Unwrap a required parameter, rejecting absent or blank values.
pub fn require(value: Option<String>, name: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!(
            "Missing required query parameter: {name}"
        ))),
    }
}

/// Unwrap a required non-negative integer parameter.
///
/// Returns the canonical decimal form so the script sees `7`, never `007`.
pub fn require_count(value: Option<String>, name: &str) -> AppResult<String> {
    let raw = require(value, name)?;
    raw.trim()
        .parse::<u32>()
        .map(|n| n.to_string())
        .map_err(|_| AppError::BadRequest(format!("{name} must be a non-negative integer")))
}
