//! Input validation
//!
//! Shared text length limits referenced by the request DTOs' `validator`
//! derives, plus the helper that runs them. u64 because that is what the
//! derive's `length` arguments take.

use validator::Validate;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: customer name, inventory item, etc.
pub const MAX_NAME_LEN: u64 = 200;

/// Notes, descriptions, reservation notes
pub const MAX_NOTE_LEN: u64 = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: u64 = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: u64 = 128;

/// URLs / image paths
pub const MAX_URL_LEN: u64 = 2048;

/// Delivery and customer addresses
pub const MAX_ADDRESS_LEN: u64 = 500;

/// Run derive-based validation on a request payload.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|e| {
        let details: Vec<String> = e
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let codes: Vec<String> = errors.iter().map(|err| err.code.to_string()).collect();
                format!("{}: {}", field, codes.join(", "))
            })
            .collect();
        AppError::validation(details.join("; "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::RegisterRequest;

    fn request() -> RegisterRequest {
        RegisterRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "s3cret-password".to_string(),
            address: "1 Test Street".to_string(),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(validate_payload(&request()).is_ok());
    }

    #[test]
    fn shared_limits_are_enforced_by_the_dtos() {
        let mut long_address = request();
        long_address.address = "x".repeat(MAX_ADDRESS_LEN as usize + 1);
        let err = validate_payload(&long_address).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let mut long_name = request();
        long_name.name = "x".repeat(MAX_NAME_LEN as usize + 1);
        assert!(validate_payload(&long_name).is_err());

        let mut long_password = request();
        long_password.password = "x".repeat(MAX_PASSWORD_LEN as usize + 1);
        assert!(validate_payload(&long_password).is_err());
    }
}
