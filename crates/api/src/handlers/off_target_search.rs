//! Off-target search handlers (siRNA and ASO).
//!
//! Both run the corresponding search script in the caller's run directory
//! with `Species IDs missMatches` and return the script's CSV result.

use axum::extract::{Query, State};
use pfred_core::script_names::{
    ASO_OFF_TARGET_OUTPUT, ASO_OFF_TARGET_SCRIPT, SIRNA_OFF_TARGET_OUTPUT,
    SIRNA_OFF_TARGET_SCRIPT,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::query::{require, require_count};
use crate::state::AppState;

/// Query parameters shared by both off-target search endpoints.
#[derive(Debug, Deserialize)]
pub struct OffTargetParams {
    #[serde(rename = "Species")]
    pub species: Option<String>,
    #[serde(rename = "RunDirectory")]
    pub run_directory: Option<String>,
    #[serde(rename = "IDs")]
    pub ids: Option<String>,
    #[serde(rename = "missMatches")]
    pub mismatches: Option<String>,
}

/// GET /OffTargetSearch/siRNA
pub async fn run_sirna_off_target_search(
    State(state): State<AppState>,
    Query(params): Query<OffTargetParams>,
) -> AppResult<String> {
    run_off_target_search(&state, params, SIRNA_OFF_TARGET_SCRIPT, SIRNA_OFF_TARGET_OUTPUT).await
}

/// GET /OffTargetSearch/ASO
pub async fn run_aso_off_target_search(
    State(state): State<AppState>,
    Query(params): Query<OffTargetParams>,
) -> AppResult<String> {
    run_off_target_search(&state, params, ASO_OFF_TARGET_SCRIPT, ASO_OFF_TARGET_OUTPUT).await
}

async fn run_off_target_search(
    state: &AppState,
    params: OffTargetParams,
    script: &str,
    output_file: &str,
) -> AppResult<String> {
    let species = require(params.species, "Species")?;
    let run_name = require(params.run_directory, "RunDirectory")?;
    let ids = require(params.ids, "IDs")?;
    let mismatches = require_count(params.mismatches, "missMatches")?;

    let orchestrator = &state.orchestrator;

    // Operator-configured bypass; see OFF_TARGET_PRECOMPUTED_SPECIES.
    if orchestrator.workspace().is_precomputed_species(&species) {
        tracing::warn!(
            run = %run_name,
            species = %species,
            script,
            "Species marked precomputed, skipping off-target search and returning existing result"
        );
        return orchestrator.read_run_file(&run_name, output_file).await;
    }

    orchestrator
        .run_script(
            &run_name,
            script,
            &[
                ("Species", species.as_str()),
                ("IDs", ids.as_str()),
                ("missMatches", mismatches.as_str()),
            ],
            output_file,
        )
        .await
}
