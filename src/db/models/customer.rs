//! Customer model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use crate::utils::validation::{MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN};

pub type CustomerId = RecordId;

pub const ROLE_CUSTOMER: &str = "customer";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CASHIER: &str = "cashier";
pub const ROLE_KITCHEN: &str = "kitchen";
pub const ROLE_WAITRESS: &str = "waitress";

pub const ALL_ROLES: [&str; 5] = [
    ROLE_CUSTOMER,
    ROLE_ADMIN,
    ROLE_CASHIER,
    ROLE_KITCHEN,
    ROLE_WAITRESS,
];

pub fn is_valid_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}

/// Customer model
///
/// `password` holds the argon2 hash; it is deserialized from the database
/// but never serialized into responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub address: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_role() -> String {
    ROLE_CUSTOMER.to_string()
}

/// Insert payload — the only place the password hash is serialized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub role: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    #[validate(email, length(max = MAX_EMAIL_LEN))]
    pub email: String,
    #[validate(length(min = 6, max = MAX_PASSWORD_LEN))]
    pub password: String,
    #[validate(length(min = 1, max = MAX_ADDRESS_LEN))]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerUpdate {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: Option<String>,
    #[validate(email, length(max = MAX_EMAIL_LEN))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = MAX_ADDRESS_LEN))]
    pub address: Option<String>,
}

/// Role change request (admin only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_are_closed_set() {
        assert!(is_valid_role(ROLE_KITCHEN));
        assert!(is_valid_role(ROLE_WAITRESS));
        assert!(!is_valid_role("manager"));
        assert!(!is_valid_role(""));
        assert!(!is_valid_role("Admin"));
    }
}
