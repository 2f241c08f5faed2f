pub mod activity_model;
pub mod health;
pub mod info;
pub mod off_target_search;
pub mod script_utilities;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /Info/Version                                    service version
///
/// /ActivityModel/siRNA                             siRNA activity model
/// /ActivityModel/ASO                               ASO activity model
///
/// /OffTargetSearch/siRNA                           siRNA off-target search
/// /OffTargetSearch/ASO                             ASO off-target search
///
/// /ScriptUtilities/Orthologs                       ortholog lookup
/// /ScriptUtilities/enumerate_first                 oligo enumeration
/// /ScriptUtilities/enumerate_second                sequence.fa of a run
/// /ScriptUtilities/clean                           remove a run directory
/// ```
///
/// Every route is `GET` with query parameters and answers in plain text.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/Info", info::router())
        .nest("/ActivityModel", activity_model::router())
        .nest("/OffTargetSearch", off_target_search::router())
        .nest("/ScriptUtilities", script_utilities::router())
}
