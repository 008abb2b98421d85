//! Admin registration.

use serde::Deserialize;
use validator::Validate;

use super::digits_only;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAdmin {
    #[validate(length(min = 1, max = 20))]
    pub registration_id: String,
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(range(min = 1))]
    pub aadhar: i64,
    #[validate(length(min = 1, max = 10), custom(function = "digits_only"))]
    pub phone: String,
    #[validate(length(min = 1, max = 10))]
    pub gender: String,
}
