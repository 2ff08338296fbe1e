//! Order and order item models

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::{Cake, Customer};
use crate::utils::validation::MAX_ADDRESS_LEN;

pub type OrderId = RecordId;

/// Payment-side order lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Preparing,
    Delivered,
    Cancelled,
}

/// Kitchen-side lifecycle, tracked independently of [`OrderStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodStatus {
    Pending,
    Cooking,
    Ready,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for FoodStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FoodStatus::Pending => "pending",
            FoodStatus::Cooking => "cooking",
            FoodStatus::Ready => "ready",
            FoodStatus::Delivered => "delivered",
            FoodStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Order row
///
/// Immutable after creation except for the two status columns.
/// `total_price` is fixed at checkout and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<OrderId>,
    pub customer: RecordId,
    pub status: OrderStatus,
    pub food_status: FoodStatus,
    pub total_price: f64,
    pub delivery_address: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Order item row — cake id and per-unit price copied at creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Option<RecordId>,
    pub order_id: RecordId,
    pub cake: RecordId,
    pub quantity: i64,
    pub price: f64,
    pub subtotal: f64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Fully populated order returned by the read paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: Option<OrderId>,
    pub customer: Customer,
    pub status: OrderStatus,
    pub food_status: FoodStatus,
    pub total_price: f64,
    pub delivery_address: String,
    pub items: Vec<OrderItemDetail>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Order item with the referenced cake fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDetail {
    pub id: Option<RecordId>,
    pub cake: Cake,
    pub quantity: i64,
    pub price: f64,
    pub subtotal: f64,
}

/// Checkout request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderCreate {
    #[validate(length(min = 1, max = MAX_ADDRESS_LEN))]
    pub delivery_address: String,
}

/// Kitchen status update request
#[derive(Debug, Clone, Deserialize)]
pub struct FoodStatusUpdate {
    pub food_status: FoodStatus,
}
