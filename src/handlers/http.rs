//! Shared state, health and aggregate statistics.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::db::{vote_count_by_poll, vote_count_total, voter_count_total, DbPool};
use crate::error::AppError;
use crate::handlers::extract::AppPath;

/// Shared application state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DbPool {
        &self.db
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "votedb" })),
    )
}

/// GET /stats — total votes cast and registered voters.
pub async fn stats(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let total_votes = vote_count_total(state.db()).await?;
    let total_voters = voter_count_total(state.db()).await?;
    Ok(Json(json!({
        "total_votes": total_votes,
        "total_voters": total_voters
    })))
}

/// GET /stats/party/:party — votes whose poll name contains `party`.
pub async fn party_stats(
    State(state): State<AppState>,
    AppPath(party): AppPath<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let votes = vote_count_by_poll(state.db(), &party).await?;
    Ok(Json(json!({ "party": party, "votes": votes })))
}
