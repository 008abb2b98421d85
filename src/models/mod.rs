//! Request payloads for voters, admins and votes.

pub mod admin;
pub mod vote;
pub mod voter;

pub use admin::*;
pub use vote::*;
pub use voter::*;

use validator::ValidationError;

pub(crate) fn digits_only(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("digits_only"))
    }
}
