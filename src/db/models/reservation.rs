//! Reservation model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::DiningTable;
use crate::utils::validation::MAX_NOTE_LEN;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Option<RecordId>,
    pub customer: RecordId,
    pub dining_table: RecordId,
    /// Reservation time (millis)
    pub reserved_at: i64,
    pub guest_count: i32,
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Reservation with the table record fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDetail {
    pub id: Option<RecordId>,
    pub customer: RecordId,
    pub dining_table: DiningTable,
    pub reserved_at: i64,
    pub guest_count: i32,
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationCreate {
    /// Dining table record id
    pub table_id: String,
    #[validate(range(min = 1))]
    pub reserved_at: i64,
    #[validate(range(min = 1))]
    pub guest_count: i32,
    #[validate(length(max = MAX_NOTE_LEN))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationUpdate {
    pub table_id: Option<String>,
    #[validate(range(min = 1))]
    pub reserved_at: Option<i64>,
    #[validate(range(min = 1))]
    pub guest_count: Option<i32>,
    #[validate(length(max = MAX_NOTE_LEN))]
    pub note: Option<String>,
}
