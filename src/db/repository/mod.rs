//! Repository Module
//!
//! CRUD and query operations per table. All SurrealQL lives here; callers
//! only see the typed read/write contracts.

pub mod cake;
pub mod cart;
pub mod customer;
pub mod dining_table;
pub mod inventory;
pub mod order;
pub mod payment;
pub mod reservation;
pub mod wishlist;

pub use cake::CakeRepository;
pub use cart::CartRepository;
pub use customer::CustomerRepository;
pub use dining_table::DiningTableRepository;
pub use inventory::InventoryRepository;
pub use order::OrderRepository;
pub use payment::PaymentRepository;
pub use reservation::ReservationRepository;
pub use wishlist::WishListRepository;

use serde::{Deserialize, Serialize};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // Unique index violations surface as "already contains" query errors
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Parse a record id that may arrive as `table:key` or a bare key.
///
/// Rejects ids that name a different table.
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    if id.contains(':') {
        let rid: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid id format: {id}")))?;
        if rid.table() != table {
            return Err(RepoError::Validation(format!(
                "Expected {table} id, got {id}"
            )));
        }
        Ok(rid)
    } else {
        Ok(RecordId::from_table_key(table, id))
    }
}

// =============================================================================
// Pagination
// =============================================================================

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// Query params for paginated listings (`?page=`, `?limit=`)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl Pagination {
    /// Clamp to sane values: page >= 1, limit defaults to 10 when <= 0
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            limit: if self.limit > 0 { self.limit } else { 10 },
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// One page of results plus the listing metadata
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    /// `total_pages` keeps the source's integer division
    pub fn new(data: Vec<T>, total: i64, page: &Pagination) -> Self {
        Self {
            data,
            total,
            page: page.page,
            page_size: page.limit,
            total_pages: total / page.limit,
        }
    }
}

/// Row shape for `SELECT count() ... GROUP ALL`
#[derive(Debug, Deserialize)]
pub(crate) struct CountRow {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults() {
        let p = Pagination { page: 0, limit: -5 }.normalized();
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 10);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn paginated_total_pages_uses_integer_division() {
        let page = Pagination { page: 1, limit: 10 };
        let p: Paginated<i32> = Paginated::new(vec![], 25, &page);
        assert_eq!(p.total_pages, 2);
    }

    #[test]
    fn parse_record_id_accepts_both_forms() {
        assert!(parse_record_id("cake", "cake:abc").is_ok());
        assert!(parse_record_id("cake", "abc").is_ok());
        assert!(parse_record_id("cake", "order:abc").is_err());
    }
}
