//! Repositories: admin, voters, vote and the aggregate queries over them.

use crate::error::{AppError, AppResult};
use serde::Serialize;
use sqlx::FromRow;

use super::DbPool;

// ---- Voters ----

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct VoterRow {
    pub id: i32,
    pub voter_id: String,
    pub name: String,
    pub aadhar: String,
    pub phone: String,
    pub gender: String,
}

/// Voter joined with the district of their vote, if any.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct VoterSummaryRow {
    pub name: String,
    pub phone: String,
    pub gender: String,
    pub district: Option<String>,
}

pub async fn voter_find_by_aadhar(pool: &DbPool, aadhar: &str) -> AppResult<Option<VoterRow>> {
    let row = sqlx::query_as::<_, VoterRow>(
        "SELECT id, voter_id, name, aadhar, phone, gender FROM voters WHERE aadhar = $1",
    )
    .bind(aadhar)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn voter_find_by_voter_id(
    pool: &DbPool,
    voter_id: &str,
) -> AppResult<Option<VoterRow>> {
    let row = sqlx::query_as::<_, VoterRow>(
        "SELECT id, voter_id, name, aadhar, phone, gender FROM voters WHERE voter_id = $1",
    )
    .bind(voter_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn voter_create(
    pool: &DbPool,
    voter_id: &str,
    name: &str,
    aadhar: &str,
    phone: &str,
    gender: &str,
) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO voters (voter_id, name, aadhar, phone, gender)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(voter_id)
    .bind(name)
    .bind(aadhar)
    .bind(phone)
    .bind(gender)
    .execute(pool)
    .await
    .map_err(|e| AppError::from_insert(e, "voter"))?;
    Ok(())
}

pub async fn voter_update_by_aadhar(
    pool: &DbPool,
    name: &str,
    phone: &str,
    gender: &str,
    aadhar: &str,
) -> AppResult<u64> {
    let r = sqlx::query("UPDATE voters SET name = $1, phone = $2, gender = $3 WHERE aadhar = $4")
        .bind(name)
        .bind(phone)
        .bind(gender)
        .bind(aadhar)
        .execute(pool)
        .await?;
    Ok(r.rows_affected())
}

pub async fn voter_delete_by_aadhar(pool: &DbPool, aadhar: &str) -> AppResult<u64> {
    let r = sqlx::query("DELETE FROM voters WHERE aadhar = $1")
        .bind(aadhar)
        .execute(pool)
        .await?;
    Ok(r.rows_affected())
}

pub async fn voters_list_with_district(pool: &DbPool) -> AppResult<Vec<VoterSummaryRow>> {
    let rows = sqlx::query_as::<_, VoterSummaryRow>(
        r#"
        SELECT voters.name, voters.phone, voters.gender, vote.district
        FROM voters
        LEFT JOIN vote ON voters.voter_id = vote.voter_id
        ORDER BY voters.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn voter_summary_by_aadhar(
    pool: &DbPool,
    aadhar: &str,
) -> AppResult<Option<VoterSummaryRow>> {
    let row = sqlx::query_as::<_, VoterSummaryRow>(
        r#"
        SELECT voters.name, voters.phone, voters.gender, vote.district
        FROM voters
        LEFT JOIN vote ON voters.voter_id = vote.voter_id
        WHERE voters.aadhar = $1
        "#,
    )
    .bind(aadhar)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn voter_count_total(pool: &DbPool) -> AppResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM voters")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

// ---- Votes (one per voter) ----

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct VoteRow {
    pub id: i32,
    pub voter_id: String,
    pub poll: String,
    pub district: String,
}

pub async fn vote_create(
    pool: &DbPool,
    voter_id: &str,
    poll: &str,
    district: &str,
) -> AppResult<()> {
    sqlx::query("INSERT INTO vote (voter_id, poll, district) VALUES ($1, $2, $3)")
        .bind(voter_id)
        .bind(poll)
        .bind(district)
        .execute(pool)
        .await
        .map_err(|e| AppError::from_insert(e, "vote for this voter"))?;
    Ok(())
}

pub async fn vote_find_by_voter_id(pool: &DbPool, voter_id: &str) -> AppResult<Option<VoteRow>> {
    let row = sqlx::query_as::<_, VoteRow>(
        "SELECT id, voter_id, poll, district FROM vote WHERE voter_id = $1",
    )
    .bind(voter_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn vote_count_total(pool: &DbPool) -> AppResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vote")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Votes whose poll name contains `party`, ignoring case. Wildcards in `party` are not escaped.
pub async fn vote_count_by_poll(pool: &DbPool, party: &str) -> AppResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vote WHERE poll ILIKE $1")
        .bind(contains_pattern(party))
        .fetch_one(pool)
        .await?;
    Ok(count)
}

fn contains_pattern(s: &str) -> String {
    format!("%{}%", s)
}

// ---- Admin ----

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct AdminRow {
    pub id: i32,
    pub registration_id: String,
    pub name: String,
    pub aadhar: i64,
    pub phone: String,
    pub gender: String,
}

pub async fn admin_find_by_registration_id(
    pool: &DbPool,
    registration_id: &str,
) -> AppResult<Option<AdminRow>> {
    let row = sqlx::query_as::<_, AdminRow>(
        "SELECT id, registration_id, name, aadhar, phone, gender FROM admin WHERE registration_id = $1",
    )
    .bind(registration_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn admin_find_by_aadhar(pool: &DbPool, aadhar: i64) -> AppResult<Option<AdminRow>> {
    let row = sqlx::query_as::<_, AdminRow>(
        "SELECT id, registration_id, name, aadhar, phone, gender FROM admin WHERE aadhar = $1",
    )
    .bind(aadhar)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn admin_create(
    pool: &DbPool,
    registration_id: &str,
    name: &str,
    aadhar: i64,
    phone: &str,
    gender: &str,
) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO admin (registration_id, name, aadhar, phone, gender)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(registration_id)
    .bind(name)
    .bind(aadhar)
    .bind(phone)
    .bind(gender)
    .execute(pool)
    .await
    .map_err(|e| AppError::from_insert(e, "admin"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_pattern_matches_substring() {
        assert_eq!(contains_pattern("BJP"), "%BJP%");
        assert_eq!(contains_pattern(""), "%%");
    }
}
