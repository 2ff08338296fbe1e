//! Payment model
//!
//! One payment row per order (unique index on `order_id`), mutated only by
//! provider notifications.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type PaymentId = RecordId;

/// Mirrors but is distinct from [`super::OrderStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Settled,
    Failed,
    Cancelled,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Settled => "settled",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Option<PaymentId>,
    pub order_id: RecordId,
    pub amount: f64,
    pub status: PaymentStatus,
    /// Opaque provider token
    pub payment_token: String,
    /// Redirect URL the client is sent to
    pub payment_url: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}
