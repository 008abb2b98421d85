//! Entry point: load config, bootstrap the database, and run the server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use votedb::config::Config;
use votedb::db;
use votedb::{create_app, AppState, VotingService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The database may already exist under a role without CREATEDB.
    if let Err(e) = db::ensure_database(&config.database_url).await {
        tracing::error!(error = %e, "failed to initialize database");
    }

    let db_pool =
        db::create_pool(&config.database_url, config.pool_size, config.acquire_timeout).await?;
    db::init_schema(&db_pool).await?;

    let voting = VotingService::new(db_pool.clone());
    let voters = voting.total_voters().await;
    let votes = voting.total_votes().await;
    tracing::info!(?voters, ?votes, "voting data loaded");

    let app = create_app(AppState::new(db_pool));

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
