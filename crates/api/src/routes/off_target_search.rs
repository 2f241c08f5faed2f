//! Route definitions for off-target search endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::off_target_search;
use crate::state::AppState;

/// Routes mounted at `/OffTargetSearch`.
///
/// ```text
/// GET /siRNA                        -> run_sirna_off_target_search
/// GET /ASO                          -> run_aso_off_target_search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/siRNA", get(off_target_search::run_sirna_off_target_search))
        .route("/ASO", get(off_target_search::run_aso_off_target_search))
}
