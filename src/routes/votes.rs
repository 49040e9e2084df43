use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_VOTE_FIELDS_REQUIRED, MSG_VOTE_SUBMITTED};
use crate::error::{AppError, Result};
use crate::models::{CandidateCounts, VoteTable};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub candidate_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub success: bool,
    pub message: String,
    /// Counts for the voted category after the increment
    pub votes: CandidateCounts,
}

/// Submit one vote
///
/// Returns 400 when a field is missing or the candidate is not listed in
/// the category, 404 when the category does not exist.
pub async fn submit_vote(
    State(state): State<AppState>,
    payload: std::result::Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<VoteResponse>> {
    let Json(payload) = payload?;
    let (category_id, candidate) = match (payload.category_id, payload.candidate_name) {
        (Some(c), Some(n)) if !c.is_empty() && !n.is_empty() => (c, n),
        _ => return Err(AppError::Validation(ERR_VOTE_FIELDS_REQUIRED.to_string())),
    };

    let stores = state.stores.clone();
    let votes =
        tokio::task::spawn_blocking(move || stores.record_vote(&category_id, &candidate)).await??;

    Ok(Json(VoteResponse {
        success: true,
        message: MSG_VOTE_SUBMITTED.to_string(),
        votes,
    }))
}

/// Raw vote document (administrative view)
pub async fn all_votes(State(state): State<AppState>) -> Result<Json<VoteTable>> {
    let stores = state.stores.clone();
    let votes = tokio::task::spawn_blocking(move || stores.votes.get_all()).await?;

    Ok(Json(votes))
}
