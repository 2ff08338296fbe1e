//! Inventory (ingredient stock) model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use crate::utils::validation::MAX_NAME_LEN;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub id: Option<RecordId>,
    pub name: String,
    /// Unit of measure, e.g. "kg", "pcs"
    #[serde(default)]
    pub unit: String,
    pub quantity: f64,
    /// Listing in /low-stock when quantity <= threshold
    #[serde(default)]
    pub low_stock_threshold: f64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InventoryCreate {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    pub unit: Option<String>,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[validate(range(min = 0.0))]
    pub low_stock_threshold: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InventoryUpdate {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: Option<String>,
    pub unit: Option<String>,
    #[validate(range(min = 0.0))]
    pub quantity: Option<f64>,
    #[validate(range(min = 0.0))]
    pub low_stock_threshold: Option<f64>,
}

/// Relative stock adjustment, applied atomically
#[derive(Debug, Clone, Deserialize)]
pub struct StockAdjust {
    pub change: f64,
}
