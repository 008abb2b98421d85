//! Voting façade over the repositories.
//!
//! Every call is one statement against the pool. Failures are logged and turned
//! into a sentinel: `None` for lookups and counts, `false` for mutations.

use tracing::error;

use crate::db::{self, AdminRow, DbPool, VoteRow, VoterRow, VoterSummaryRow};
use crate::error::AppResult;

#[derive(Clone)]
pub struct VotingService {
    pool: DbPool,
}

impl VotingService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // ---- Voters ----

    pub async fn find_voter_by_aadhar(&self, aadhar: &str) -> Option<VoterRow> {
        swallow("find_voter_by_aadhar", db::voter_find_by_aadhar(&self.pool, aadhar).await)
            .flatten()
    }

    pub async fn find_voter_by_voter_id(&self, voter_id: &str) -> Option<VoterRow> {
        swallow(
            "find_voter_by_voter_id",
            db::voter_find_by_voter_id(&self.pool, voter_id).await,
        )
        .flatten()
    }

    pub async fn add_voter(
        &self,
        voter_id: &str,
        name: &str,
        aadhar: &str,
        phone: &str,
        gender: &str,
    ) -> bool {
        swallow(
            "add_voter",
            db::voter_create(&self.pool, voter_id, name, aadhar, phone, gender).await,
        )
        .is_some()
    }

    /// Reports success whenever the statement ran, even if no voter matched.
    pub async fn update_voter_by_aadhar(
        &self,
        name: &str,
        phone: &str,
        gender: &str,
        aadhar: &str,
    ) -> bool {
        swallow(
            "update_voter_by_aadhar",
            db::voter_update_by_aadhar(&self.pool, name, phone, gender, aadhar).await,
        )
        .is_some()
    }

    /// `true` only when a row was actually removed.
    pub async fn delete_voter_by_aadhar(&self, aadhar: &str) -> bool {
        swallow(
            "delete_voter_by_aadhar",
            db::voter_delete_by_aadhar(&self.pool, aadhar).await,
        )
        .is_some_and(|affected| affected > 0)
    }

    pub async fn all_voters(&self) -> Option<Vec<VoterSummaryRow>> {
        swallow("all_voters", db::voters_list_with_district(&self.pool).await)
    }

    pub async fn voter_summary_by_aadhar(&self, aadhar: &str) -> Option<VoterSummaryRow> {
        swallow(
            "voter_summary_by_aadhar",
            db::voter_summary_by_aadhar(&self.pool, aadhar).await,
        )
        .flatten()
    }

    pub async fn total_voters(&self) -> Option<i64> {
        swallow("total_voters", db::voter_count_total(&self.pool).await)
    }

    // ---- Votes ----

    pub async fn submit_vote(&self, voter_id: &str, poll: &str, district: &str) -> bool {
        swallow(
            "submit_vote",
            db::vote_create(&self.pool, voter_id, poll, district).await,
        )
        .is_some()
    }

    pub async fn find_vote_by_voter_id(&self, voter_id: &str) -> Option<VoteRow> {
        swallow(
            "find_vote_by_voter_id",
            db::vote_find_by_voter_id(&self.pool, voter_id).await,
        )
        .flatten()
    }

    pub async fn total_votes(&self) -> Option<i64> {
        swallow("total_votes", db::vote_count_total(&self.pool).await)
    }

    pub async fn party_votes(&self, party: &str) -> Option<i64> {
        swallow("party_votes", db::vote_count_by_poll(&self.pool, party).await)
    }

    // ---- Admin ----

    pub async fn find_admin_by_registration_id(&self, registration_id: &str) -> Option<AdminRow> {
        swallow(
            "find_admin_by_registration_id",
            db::admin_find_by_registration_id(&self.pool, registration_id).await,
        )
        .flatten()
    }

    pub async fn find_admin_by_aadhar(&self, aadhar: i64) -> Option<AdminRow> {
        swallow(
            "find_admin_by_aadhar",
            db::admin_find_by_aadhar(&self.pool, aadhar).await,
        )
        .flatten()
    }

    pub async fn add_admin(
        &self,
        registration_id: &str,
        name: &str,
        aadhar: i64,
        phone: &str,
        gender: &str,
    ) -> bool {
        swallow(
            "add_admin",
            db::admin_create(&self.pool, registration_id, name, aadhar, phone, gender).await,
        )
        .is_some()
    }
}

fn swallow<T>(op: &'static str, result: AppResult<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            error!(op, error = %e, "database operation failed");
            None
        }
    }
}
