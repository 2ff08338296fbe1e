//! Cake (menu) model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use crate::utils::validation::MAX_URL_LEN;

pub type CakeId = RecordId;

/// Cake model — one menu entry
///
/// `price` is copied into order items at checkout; editing a cake never
/// touches historical orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cake {
    pub id: Option<CakeId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// 0..=10 rating shown on the menu
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    /// Soft-delete timestamp (millis); deleted cakes stay referenced by orders
    pub deleted_at: Option<i64>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CakeCreate {
    #[validate(length(min = 3, max = 100))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: f64,
    #[validate(url, length(max = MAX_URL_LEN))]
    pub image: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CakeUpdate {
    #[validate(length(min = 3, max = 100))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: Option<f64>,
    #[validate(url, length(max = MAX_URL_LEN))]
    pub image: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub category: Option<String>,
}
