//! Script utility handlers: ortholog lookup, oligo enumeration, and run
//! directory cleanup.

use axum::extract::{Query, State};
use pfred_core::error::CoreError;
use pfred_core::run_dir::RemoveOutcome;
use pfred_core::script_names::{
    ENUMERATION_OUTPUT, ENUMERATION_SCRIPT, ENUMERATION_SEQUENCE_FILE, ORTHOLOGS_OUTPUT,
    ORTHOLOGS_SCRIPT,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::query::{require, require_count, RunParams};
use crate::state::AppState;

/// Body returned by `enumerate_second` when there is no sequence to return.
pub const EMPTY_SEQUENCE_MESSAGE: &str = "sequence.fa is empty";

/// Body returned by `clean`.
pub const RUN_REMOVED_MESSAGE: &str = "Run directory removed";

/// Query parameters for `GET /ScriptUtilities/Orthologs`.
#[derive(Debug, Deserialize)]
pub struct OrthologParams {
    /// Ensembl gene ID. The parameter name is misspelt in deployed clients.
    #[serde(rename = "enseblID")]
    pub ensembl_id: Option<String>,
    #[serde(rename = "RunDirectory")]
    pub run_directory: Option<String>,
    #[serde(rename = "RequestedSpecies")]
    pub requested_species: Option<String>,
    #[serde(rename = "Species")]
    pub species: Option<String>,
}

/// Query parameters for `GET /ScriptUtilities/enumerate_first`.
#[derive(Debug, Deserialize)]
pub struct EnumerateParams {
    #[serde(rename = "SecondaryTranscriptIDs")]
    pub secondary_transcript_ids: Option<String>,
    #[serde(rename = "RunDirectory")]
    pub run_directory: Option<String>,
    #[serde(rename = "PrimaryTranscriptID")]
    pub primary_transcript_id: Option<String>,
    #[serde(rename = "oligoLen")]
    pub oligo_len: Option<String>,
}

/// GET /ScriptUtilities/Orthologs
///
/// Runs `getOrthologs.sh enseblID Species RequestedSpecies` and returns
/// `seqAnnotation.csv`.
pub async fn get_orthologs(
    State(state): State<AppState>,
    Query(params): Query<OrthologParams>,
) -> AppResult<String> {
    let ensembl_id = require(params.ensembl_id, "enseblID")?;
    let run_name = require(params.run_directory, "RunDirectory")?;
    let requested_species = require(params.requested_species, "RequestedSpecies")?;
    let species = require(params.species, "Species")?;

    state
        .orchestrator
        .run_script(
            &run_name,
            ORTHOLOGS_SCRIPT,
            &[
                ("enseblID", ensembl_id.as_str()),
                ("Species", species.as_str()),
                ("RequestedSpecies", requested_species.as_str()),
            ],
            ORTHOLOGS_OUTPUT,
        )
        .await
}

/// GET /ScriptUtilities/enumerate_first
///
/// Runs `Enumeration.sh SecondaryTranscriptIDs PrimaryTranscriptID oligoLen`
/// and returns `EnumerationResult.csv`. The script also leaves
/// `sequence.fa` behind for `enumerate_second`.
pub async fn enumerate_first(
    State(state): State<AppState>,
    Query(params): Query<EnumerateParams>,
) -> AppResult<String> {
    let secondary_ids = require(params.secondary_transcript_ids, "SecondaryTranscriptIDs")?;
    let run_name = require(params.run_directory, "RunDirectory")?;
    let primary_id = require(params.primary_transcript_id, "PrimaryTranscriptID")?;
    let oligo_len = require_count(params.oligo_len, "oligoLen")?;

    state
        .orchestrator
        .run_script(
            &run_name,
            ENUMERATION_SCRIPT,
            &[
                ("SecondaryTranscriptIDs", secondary_ids.as_str()),
                ("PrimaryTranscriptID", primary_id.as_str()),
                ("oligoLen", oligo_len.as_str()),
            ],
            ENUMERATION_OUTPUT,
        )
        .await
}

/// GET /ScriptUtilities/enumerate_second
///
/// Returns the `sequence.fa` produced by a previous `enumerate_first` in the
/// same run. Nothing is executed.
pub async fn enumerate_second(
    State(state): State<AppState>,
    Query(params): Query<RunParams>,
) -> AppResult<String> {
    let run_name = require(params.run_directory, "RunDirectory")?;

    match state
        .orchestrator
        .read_run_file(&run_name, ENUMERATION_SEQUENCE_FILE)
        .await
    {
        Ok(sequence) if !sequence.is_empty() => Ok(sequence),
        Ok(_) | Err(AppError::Core(CoreError::NotFound { .. })) => {
            Ok(EMPTY_SEQUENCE_MESSAGE.to_string())
        }
        Err(e) => Err(e),
    }
}

/// GET /ScriptUtilities/clean
///
/// Removes the run directory. Succeeds whether or not it existed.
pub async fn clean_run_dir(
    State(state): State<AppState>,
    Query(params): Query<RunParams>,
) -> AppResult<String> {
    let run_name = require(params.run_directory, "RunDirectory")?;

    match state.orchestrator.clean_run(&run_name).await? {
        RemoveOutcome::Removed => tracing::info!(run = %run_name, "Run directory removed"),
        RemoveOutcome::NothingToRemove => {
            tracing::info!(run = %run_name, "Run directory already absent")
        }
    }
    Ok(RUN_REMOVED_MESSAGE.to_string())
}
