//! Inventory Repository
//!
//! Stock adjustments are relative and applied in one UPDATE so that
//! concurrent adjustments never overwrite each other; quantity floors
//! at zero.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, CountRow, Paginated, Pagination, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Inventory, InventoryCreate, InventoryUpdate};
use crate::utils::now_millis;

const INVENTORY_TABLE: &str = "inventory";

#[derive(Clone)]
pub struct InventoryRepository {
    base: BaseRepository,
}

impl InventoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, data: InventoryCreate) -> RepoResult<Inventory> {
        let now = now_millis();
        let item = Inventory {
            id: None,
            name: data.name,
            unit: data.unit.unwrap_or_default(),
            quantity: data.quantity,
            low_stock_threshold: data.low_stock_threshold.unwrap_or(0.0),
            created_at: now,
            updated_at: now,
        };
        let created: Option<Inventory> =
            self.base.db().create(INVENTORY_TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create inventory item".to_string()))
    }

    pub async fn find_all(&self, page: &Pagination) -> RepoResult<Paginated<Inventory>> {
        let counts: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() AS count FROM inventory GROUP ALL")
            .await?
            .take(0)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        let rows: Vec<Inventory> = self
            .base
            .db()
            .query("SELECT * FROM inventory ORDER BY name LIMIT $limit START $start")
            .bind(("limit", page.limit))
            .bind(("start", page.offset()))
            .await?
            .take(0)?;

        Ok(Paginated::new(rows, total, page))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Inventory>> {
        let rid = parse_record_id(INVENTORY_TABLE, id)?;
        let item: Option<Inventory> = self.base.db().select(rid).await?;
        Ok(item)
    }

    /// Items at or below their threshold
    pub async fn find_low_stock(&self) -> RepoResult<Vec<Inventory>> {
        let rows: Vec<Inventory> = self
            .base
            .db()
            .query(
                "SELECT * FROM inventory WHERE quantity <= low_stock_threshold ORDER BY quantity",
            )
            .await?
            .take(0)?;
        Ok(rows)
    }

    pub async fn update(&self, id: &str, data: InventoryUpdate) -> RepoResult<Inventory> {
        let rid = parse_record_id(INVENTORY_TABLE, id)?;

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.unit.is_some() {
            set_parts.push("unit = $unit");
        }
        if data.quantity.is_some() {
            set_parts.push("quantity = $quantity");
        }
        if data.low_stock_threshold.is_some() {
            set_parts.push("low_stock_threshold = $low_stock_threshold");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Inventory item {id} not found")));
        }
        set_parts.push("updated_at = $now");

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self
            .base
            .db()
            .query(&query_str)
            .bind(("thing", rid))
            .bind(("now", now_millis()));
        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.unit {
            query = query.bind(("unit", v));
        }
        if let Some(v) = data.quantity {
            query = query.bind(("quantity", v));
        }
        if let Some(v) = data.low_stock_threshold {
            query = query.bind(("low_stock_threshold", v));
        }

        let rows: Vec<Inventory> = query.await?.take(0)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Inventory item {id} not found")))
    }

    /// Apply a relative change; the floor keeps stock non-negative
    pub async fn adjust_stock(&self, id: &str, change: f64) -> RepoResult<Inventory> {
        let rid = parse_record_id(INVENTORY_TABLE, id)?;
        let rows: Vec<Inventory> = self
            .base
            .db()
            .query(
                "UPDATE $thing SET quantity = math::max([quantity + $change, 0]), \
                 updated_at = $now RETURN AFTER",
            )
            .bind(("thing", rid))
            .bind(("change", change))
            .bind(("now", now_millis()))
            .await?
            .take(0)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Inventory item {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = parse_record_id(INVENTORY_TABLE, id)?;
        let deleted: Option<Inventory> = self.base.db().delete(rid).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Inventory item {id} not found")));
        }
        Ok(())
    }
}
