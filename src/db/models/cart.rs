//! Cart model
//!
//! One row per (customer, cake) pair, enforced by a unique index.
//! Invariant: `subtotal == quantity * unit_price` and `quantity >= 1`
//! while the row exists; the row is deleted when quantity reaches zero.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::Cake;

pub type CartItemId = RecordId;

/// Cart line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Option<CartItemId>,
    pub customer: RecordId,
    pub cake: RecordId,
    pub quantity: i64,
    pub subtotal: f64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Cart line item with the cake record fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemDetail {
    pub id: Option<CartItemId>,
    pub customer: RecordId,
    pub cake: Cake,
    pub quantity: i64,
    pub subtotal: f64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Add-to-cart request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CartAdd {
    /// Cake record id, `cake:xyz` or bare key
    pub cake_id: String,
    pub quantity: i64,
}

/// Bulk delete request — selected cart row ids
#[derive(Debug, Clone, Deserialize)]
pub struct CartBulkDelete {
    pub cart_ids: Vec<String>,
}
