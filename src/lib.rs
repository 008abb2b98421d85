//! Voting system data-access layer on PostgreSQL.
//!
//! Provisions the admin, voters and vote tables and exposes single-statement
//! CRUD operations over a pooled connection, both as typed repository
//! functions ([`db`]), as a log-and-swallow façade ([`VotingService`]) and as
//! a JSON API ([`create_app`]).

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;
pub use services::VotingService;

use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Build the API router. Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let voter_routes = axum::Router::new()
        .route("/", get(handlers::list_voters).post(handlers::create_voter))
        .route("/id/:voter_id", get(handlers::get_voter_by_voter_id))
        .route(
            "/aadhar/:aadhar",
            get(handlers::get_voter_by_aadhar)
                .put(handlers::update_voter)
                .delete(handlers::delete_voter),
        )
        .route("/aadhar/:aadhar/summary", get(handlers::get_voter_summary));

    let admin_routes = axum::Router::new()
        .route("/", post(handlers::create_admin))
        .route(
            "/id/:registration_id",
            get(handlers::get_admin_by_registration_id),
        )
        .route("/aadhar/:aadhar", get(handlers::get_admin_by_aadhar));

    axum::Router::new()
        .route("/health", get(handlers::health))
        .route("/stats", get(handlers::stats))
        .route("/stats/party/:party", get(handlers::party_stats))
        .route("/votes", post(handlers::submit_vote))
        .route("/votes/:voter_id", get(handlers::get_vote))
        .nest("/voters", voter_routes)
        .nest("/admins", admin_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
