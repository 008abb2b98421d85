//! Vote HTTP handlers. One vote per voter.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::db::{vote_create, vote_find_by_voter_id, VoteRow};
use crate::error::AppError;
use crate::handlers::extract::{AppJson, AppPath};
use crate::handlers::http::AppState;
use crate::models::NewVote;

/// POST /votes — the voter id is not checked against `voters`.
pub async fn submit_vote(
    State(state): State<AppState>,
    AppJson(body): AppJson<NewVote>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    body.validate()?;
    vote_create(state.db(), &body.voter_id, &body.poll, &body.district).await?;
    tracing::info!(district = %body.district, "vote recorded");
    Ok((StatusCode::CREATED, Json(json!({ "ok": true }))))
}

/// GET /votes/:voter_id
pub async fn get_vote(
    State(state): State<AppState>,
    AppPath(voter_id): AppPath<String>,
) -> Result<Json<VoteRow>, AppError> {
    let row = vote_find_by_voter_id(state.db(), &voter_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vote not found".to_string()))?;
    Ok(Json(row))
}
