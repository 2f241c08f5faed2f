//! Activity model handlers.
//!
//! No model script is wired in yet: both endpoints validate their input and
//! echo it back as `INPUT:...`, which is what clients currently receive.

use axum::extract::Query;
use serde::Deserialize;

use crate::error::AppResult;
use crate::query::{require, require_count};

/// Query parameters for `GET /ActivityModel/siRNA`.
#[derive(Debug, Deserialize)]
pub struct SirnaModelParams {
    #[serde(rename = "PrimarySequence")]
    pub primary_sequence: Option<String>,
}

/// Query parameters for `GET /ActivityModel/ASO`.
#[derive(Debug, Deserialize)]
pub struct AsoModelParams {
    #[serde(rename = "PrimarySequence")]
    pub primary_sequence: Option<String>,
    #[serde(rename = "OligoLength")]
    pub oligo_length: Option<String>,
}

/// GET /ActivityModel/siRNA
pub async fn run_sirna_activity_model(
    Query(params): Query<SirnaModelParams>,
) -> AppResult<String> {
    let sequence = require(params.primary_sequence, "PrimarySequence")?;
    Ok(format!("INPUT:{sequence}"))
}

/// GET /ActivityModel/ASO
pub async fn run_aso_activity_model(Query(params): Query<AsoModelParams>) -> AppResult<String> {
    let sequence = require(params.primary_sequence, "PrimarySequence")?;
    let oligo_length = require_count(params.oligo_length, "OligoLength")?;
    Ok(format!("INPUT:{sequence} {oligo_length}"))
}
