//! Voter HTTP handlers.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::db::{
    voter_create, voter_delete_by_aadhar, voter_find_by_aadhar, voter_find_by_voter_id,
    voter_summary_by_aadhar, voter_update_by_aadhar, voters_list_with_district, VoterRow,
    VoterSummaryRow,
};
use crate::error::AppError;
use crate::handlers::extract::{AppJson, AppPath};
use crate::handlers::http::AppState;
use crate::models::{NewVoter, UpdateVoter};

fn voter_not_found() -> AppError {
    AppError::NotFound("Voter not found".to_string())
}

/// POST /voters
pub async fn create_voter(
    State(state): State<AppState>,
    AppJson(body): AppJson<NewVoter>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    body.validate()?;
    voter_create(
        state.db(),
        &body.voter_id,
        &body.name,
        &body.aadhar,
        &body.phone,
        &body.gender,
    )
    .await?;
    tracing::info!(voter_id = %body.voter_id, "voter registered");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "ok": true, "voter_id": body.voter_id })),
    ))
}

/// GET /voters — every voter with the district they voted in, if any.
pub async fn list_voters(
    State(state): State<AppState>,
) -> Result<Json<Vec<VoterSummaryRow>>, AppError> {
    let rows = voters_list_with_district(state.db()).await?;
    Ok(Json(rows))
}

/// GET /voters/id/:voter_id
pub async fn get_voter_by_voter_id(
    State(state): State<AppState>,
    AppPath(voter_id): AppPath<String>,
) -> Result<Json<VoterRow>, AppError> {
    let row = voter_find_by_voter_id(state.db(), &voter_id)
        .await?
        .ok_or_else(voter_not_found)?;
    Ok(Json(row))
}

/// GET /voters/aadhar/:aadhar
pub async fn get_voter_by_aadhar(
    State(state): State<AppState>,
    AppPath(aadhar): AppPath<String>,
) -> Result<Json<VoterRow>, AppError> {
    let row = voter_find_by_aadhar(state.db(), &aadhar)
        .await?
        .ok_or_else(voter_not_found)?;
    Ok(Json(row))
}

/// GET /voters/aadhar/:aadhar/summary
pub async fn get_voter_summary(
    State(state): State<AppState>,
    AppPath(aadhar): AppPath<String>,
) -> Result<Json<VoterSummaryRow>, AppError> {
    let row = voter_summary_by_aadhar(state.db(), &aadhar)
        .await?
        .ok_or_else(voter_not_found)?;
    Ok(Json(row))
}

/// PUT /voters/aadhar/:aadhar
pub async fn update_voter(
    State(state): State<AppState>,
    AppPath(aadhar): AppPath<String>,
    AppJson(body): AppJson<UpdateVoter>,
) -> Result<Json<serde_json::Value>, AppError> {
    body.validate()?;
    let affected =
        voter_update_by_aadhar(state.db(), &body.name, &body.phone, &body.gender, &aadhar).await?;
    if affected == 0 {
        return Err(voter_not_found());
    }
    Ok(Json(json!({ "ok": true })))
}

/// DELETE /voters/aadhar/:aadhar
pub async fn delete_voter(
    State(state): State<AppState>,
    AppPath(aadhar): AppPath<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let affected = voter_delete_by_aadhar(state.db(), &aadhar).await?;
    if affected == 0 {
        return Err(voter_not_found());
    }
    tracing::info!("voter removed");
    Ok(Json(json!({ "ok": true, "deleted": affected })))
}
