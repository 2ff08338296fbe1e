//! Wishlist Repository
//!
//! Adding is idempotent: a second add of the same cake returns the
//! existing row instead of duplicating it.

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, CountRow, Paginated, Pagination, RepoError, RepoResult};
use crate::db::models::{WishList, WishListDetail};
use crate::utils::now_millis;

const WISHLIST_TABLE: &str = "wishlist";

#[derive(Debug, Serialize)]
struct WishListInsert {
    customer: RecordId,
    cake: RecordId,
    created_at: i64,
    updated_at: i64,
}

#[derive(Clone)]
pub struct WishListRepository {
    base: BaseRepository,
}

impl WishListRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn add(&self, customer: RecordId, cake: RecordId) -> RepoResult<WishList> {
        if let Some(existing) = self.find(customer.clone(), cake.clone()).await? {
            return Ok(existing);
        }
        let now = now_millis();
        let created: Option<WishList> = self
            .base
            .db()
            .create(WISHLIST_TABLE)
            .content(WishListInsert {
                customer,
                cake,
                created_at: now,
                updated_at: now,
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create wishlist entry".to_string()))
    }

    pub async fn find(&self, customer: RecordId, cake: RecordId) -> RepoResult<Option<WishList>> {
        let rows: Vec<WishList> = self
            .base
            .db()
            .query("SELECT * FROM wishlist WHERE customer = $customer AND cake = $cake LIMIT 1")
            .bind(("customer", customer))
            .bind(("cake", cake))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next())
    }

    pub async fn list_by_customer(
        &self,
        customer: RecordId,
        page: &Pagination,
    ) -> RepoResult<Paginated<WishListDetail>> {
        let counts: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() AS count FROM wishlist WHERE customer = $customer GROUP ALL")
            .bind(("customer", customer.clone()))
            .await?
            .take(0)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        let rows: Vec<WishListDetail> = self
            .base
            .db()
            .query(
                "SELECT * FROM wishlist WHERE customer = $customer ORDER BY created_at DESC \
                 LIMIT $limit START $start FETCH cake",
            )
            .bind(("customer", customer))
            .bind(("limit", page.limit))
            .bind(("start", page.offset()))
            .await?
            .take(0)?;

        Ok(Paginated::new(rows, total, page))
    }

    pub async fn remove(&self, customer: RecordId, cake: RecordId) -> RepoResult<()> {
        let deleted: Vec<WishList> = self
            .base
            .db()
            .query("DELETE wishlist WHERE customer = $customer AND cake = $cake RETURN BEFORE")
            .bind(("customer", customer))
            .bind(("cake", cake))
            .await?
            .take(0)?;
        if deleted.is_empty() {
            return Err(RepoError::NotFound("Wishlist entry not found".to_string()));
        }
        Ok(())
    }
}
