//! Route definitions for script utility endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::script_utilities;
use crate::state::AppState;

/// Routes mounted at `/ScriptUtilities`.
///
/// ```text
/// GET /Orthologs                    -> get_orthologs
/// GET /enumerate_first              -> enumerate_first
/// GET /enumerate_second             -> enumerate_second
/// GET /clean                        -> clean_run_dir
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/Orthologs", get(script_utilities::get_orthologs))
        .route("/enumerate_first", get(script_utilities::enumerate_first))
        .route("/enumerate_second", get(script_utilities::enumerate_second))
        .route("/clean", get(script_utilities::clean_run_dir))
}
