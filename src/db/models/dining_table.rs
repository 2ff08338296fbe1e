//! Dining table model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: Option<RecordId>,
    pub number: i32,
    pub capacity: i32,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

impl DiningTable {
    /// Availability and capacity gate applied before a booking touches
    /// this table. Unavailable tables conflict; an oversized party is a
    /// validation error.
    pub fn check_booking(&self, guest_count: i32) -> AppResult<()> {
        if !self.is_available {
            return Err(AppError::conflict("Table is not available"));
        }
        if guest_count > self.capacity {
            return Err(AppError::validation(format!(
                "Table seats {} guests, requested {}",
                self.capacity, guest_count
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableCreate {
    #[validate(range(min = 1))]
    pub number: i32,
    #[validate(range(min = 1))]
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableUpdate {
    #[validate(range(min = 1))]
    pub number: Option<i32>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    pub is_available: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityUpdate {
    pub is_available: bool,
}
