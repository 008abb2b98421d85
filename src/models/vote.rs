//! Ballot submission.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewVote {
    #[validate(length(min = 1, max = 20))]
    pub voter_id: String,
    /// Party or candidate name.
    #[validate(length(min = 1, max = 50))]
    pub poll: String,
    #[validate(length(min = 1, max = 50))]
    pub district: String,
}
