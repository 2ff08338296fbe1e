//! Wishlist model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::Cake;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishList {
    pub id: Option<RecordId>,
    pub customer: RecordId,
    pub cake: RecordId,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Wishlist entry with the cake record fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishListDetail {
    pub id: Option<RecordId>,
    pub customer: RecordId,
    pub cake: Cake,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}
