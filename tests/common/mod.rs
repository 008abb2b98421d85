//! Shared helpers for database-backed tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use votedb::db::{self, DbPool};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Pool against `TEST_DATABASE_URL` with the schema in place, or `None` to skip.
pub async fn test_pool() -> Option<DbPool> {
    let database_url = match std::env::var("TEST_DATABASE_URL") {
        Ok(u) => u,
        Err(_) => {
            eprintln!("Skip integration test: set TEST_DATABASE_URL");
            return None;
        }
    };
    let pool = match db::create_pool(&database_url, 5, Duration::from_secs(5)).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Skip integration test: {}", e);
            return None;
        }
    };
    db::init_schema(&pool).await.expect("schema bootstrap");
    Some(pool)
}

/// Twelve decimal digits: process id, coarse clock, per-process counter.
/// Test binaries run in parallel against one database, so the pid keeps them apart.
pub fn unique_digits() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let pid = u64::from(std::process::id());
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:05}{:04}{:03}", pid % 100_000, secs % 10_000, n % 1_000)
}

pub struct Ids {
    pub voter_id: String,
    pub aadhar: String,
}

pub fn unique_voter() -> Ids {
    let digits = unique_digits();
    Ids {
        voter_id: format!("T{}", digits),
        aadhar: digits,
    }
}
