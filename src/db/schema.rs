//! Table definitions for admin, voters and vote.

use tracing::info;

use super::DbPool;
use crate::error::AppResult;

const CREATE_ADMIN: &str = r#"
    CREATE TABLE IF NOT EXISTS admin (
        id SERIAL PRIMARY KEY,
        registration_id VARCHAR(20) NOT NULL UNIQUE,
        name VARCHAR(50) NOT NULL,
        aadhar BIGINT NOT NULL UNIQUE,
        phone VARCHAR(10) NOT NULL,
        gender VARCHAR(10) NOT NULL
    )
"#;

const CREATE_VOTERS: &str = r#"
    CREATE TABLE IF NOT EXISTS voters (
        id SERIAL PRIMARY KEY,
        voter_id VARCHAR(20) NOT NULL UNIQUE,
        name VARCHAR(50) NOT NULL,
        aadhar VARCHAR(12) NOT NULL UNIQUE,
        phone VARCHAR(10) NOT NULL,
        gender VARCHAR(10) NOT NULL
    )
"#;

// One vote per voter: voter_id is unique.
const CREATE_VOTE: &str = r#"
    CREATE TABLE IF NOT EXISTS vote (
        id SERIAL PRIMARY KEY,
        voter_id VARCHAR(20) NOT NULL UNIQUE,
        poll VARCHAR(50) NOT NULL,
        district VARCHAR(50) NOT NULL
    )
"#;

// Serializes concurrent bootstraps; CREATE TABLE IF NOT EXISTS is not race-free in Postgres.
const SCHEMA_LOCK_KEY: i64 = 0x766f_7465;

/// Create all tables if missing. Safe to call on every startup.
pub async fn init_schema(pool: &DbPool) -> AppResult<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    for ddl in [CREATE_ADMIN, CREATE_VOTERS, CREATE_VOTE] {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    info!("database tables initialized");
    Ok(())
}
