//! Route definitions for service metadata.

use axum::routing::get;
use axum::Router;

use crate::handlers::info;
use crate::state::AppState;

/// Routes mounted at `/Info`.
///
/// ```text
/// GET /Version                      -> version
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/Version", get(info::version))
}
