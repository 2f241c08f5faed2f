//! Route definitions for activity model endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity_model;
use crate::state::AppState;

/// Routes mounted at `/ActivityModel`.
///
/// ```text
/// GET /siRNA                        -> run_sirna_activity_model
/// GET /ASO                          -> run_aso_activity_model
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/siRNA", get(activity_model::run_sirna_activity_model))
        .route("/ASO", get(activity_model::run_aso_activity_model))
}
