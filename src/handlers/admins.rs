//! Admin HTTP handlers.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::db::{admin_create, admin_find_by_aadhar, admin_find_by_registration_id, AdminRow};
use crate::error::AppError;
use crate::handlers::extract::{AppJson, AppPath};
use crate::handlers::http::AppState;
use crate::models::NewAdmin;

/// POST /admins
pub async fn create_admin(
    State(state): State<AppState>,
    AppJson(body): AppJson<NewAdmin>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    body.validate()?;
    admin_create(
        state.db(),
        &body.registration_id,
        &body.name,
        body.aadhar,
        &body.phone,
        &body.gender,
    )
    .await?;
    tracing::info!(registration_id = %body.registration_id, "admin registered");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "ok": true, "registration_id": body.registration_id })),
    ))
}

/// GET /admins/id/:registration_id
pub async fn get_admin_by_registration_id(
    State(state): State<AppState>,
    AppPath(registration_id): AppPath<String>,
) -> Result<Json<AdminRow>, AppError> {
    let row = admin_find_by_registration_id(state.db(), &registration_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))?;
    Ok(Json(row))
}

/// GET /admins/aadhar/:aadhar
pub async fn get_admin_by_aadhar(
    State(state): State<AppState>,
    AppPath(aadhar): AppPath<i64>,
) -> Result<Json<AdminRow>, AppError> {
    let row = admin_find_by_aadhar(state.db(), aadhar)
        .await?
        .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))?;
    Ok(Json(row))
}
