//! Voter registration and profile updates.

use serde::Deserialize;
use validator::Validate;

use super::digits_only;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewVoter {
    #[validate(length(min = 1, max = 20))]
    pub voter_id: String,
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    /// 12-digit Aadhar number.
    #[validate(length(equal = 12), custom(function = "digits_only"))]
    pub aadhar: String,
    #[validate(length(min = 1, max = 10), custom(function = "digits_only"))]
    pub phone: String,
    #[validate(length(min = 1, max = 10))]
    pub gender: String,
}

/// Editable voter fields; the Aadhar number identifies the row and is not changed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVoter {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 10), custom(function = "digits_only"))]
    pub phone: String,
    #[validate(length(min = 1, max = 10))]
    pub gender: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voter() -> NewVoter {
        NewVoter {
            voter_id: "VOT1001".to_string(),
            name: "Asha Rao".to_string(),
            aadhar: "123456789012".to_string(),
            phone: "9876543210".to_string(),
            gender: "female".to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_voter() {
        assert!(voter().validate().is_ok());
    }

    #[test]
    fn rejects_short_or_non_numeric_aadhar() {
        let mut v = voter();
        v.aadhar = "12345".to_string();
        assert!(v.validate().is_err());

        v.aadhar = "12345678901X".to_string();
        assert!(v.validate().is_err());
    }

    #[test]
    fn rejects_oversized_fields() {
        let mut v = voter();
        v.voter_id = "V".repeat(21);
        assert!(v.validate().is_err());

        let mut v = voter();
        v.phone = "98765432101".to_string();
        assert!(v.validate().is_err());
    }

    #[test]
    fn update_requires_name() {
        let u = UpdateVoter {
            name: String::new(),
            phone: "9876543210".to_string(),
            gender: "male".to_string(),
        };
        assert!(u.validate().is_err());
    }
}
