//! Dining Table Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, CountRow, Paginated, Pagination, RepoError, RepoResult, parse_record_id};
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use crate::utils::now_millis;

const TABLE_TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert a table; the unique number index rejects duplicates
    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        let now = now_millis();
        let table = DiningTable {
            id: None,
            number: data.number,
            capacity: data.capacity,
            is_available: true,
            created_at: now,
            updated_at: now,
        };
        let created: Option<DiningTable> = self
            .base
            .db()
            .create(TABLE_TABLE)
            .content(table)
            .await
            .map_err(|e| match RepoError::from(e) {
                RepoError::Duplicate(_) => {
                    RepoError::Duplicate("Table number already exists".to_string())
                }
                other => other,
            })?;
        created.ok_or_else(|| RepoError::Database("Failed to create table".to_string()))
    }

    pub async fn find_all(&self, page: &Pagination) -> RepoResult<Paginated<DiningTable>> {
        let counts: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() AS count FROM dining_table GROUP ALL")
            .await?
            .take(0)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        let rows: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY number LIMIT $limit START $start")
            .bind(("limit", page.limit))
            .bind(("start", page.offset()))
            .await?
            .take(0)?;

        Ok(Paginated::new(rows, total, page))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        let rid = parse_record_id(TABLE_TABLE, id)?;
        let table: Option<DiningTable> = self.base.db().select(rid).await?;
        Ok(table)
    }

    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        let rid = parse_record_id(TABLE_TABLE, id)?;

        let mut set_parts: Vec<&str> = Vec::new();
        if data.number.is_some() {
            set_parts.push("number = $number");
        }
        if data.capacity.is_some() {
            set_parts.push("capacity = $capacity");
        }
        if data.is_available.is_some() {
            set_parts.push("is_available = $is_available");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")));
        }
        set_parts.push("updated_at = $now");

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self
            .base
            .db()
            .query(&query_str)
            .bind(("thing", rid))
            .bind(("now", now_millis()));
        if let Some(v) = data.number {
            query = query.bind(("number", v));
        }
        if let Some(v) = data.capacity {
            query = query.bind(("capacity", v));
        }
        if let Some(v) = data.is_available {
            query = query.bind(("is_available", v));
        }

        let rows: Vec<DiningTable> = query.await?.take(0)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")))
    }

    pub async fn set_availability(&self, id: &str, available: bool) -> RepoResult<DiningTable> {
        let rid = parse_record_id(TABLE_TABLE, id)?;
        let rows: Vec<DiningTable> = self
            .base
            .db()
            .query("UPDATE $thing SET is_available = $available, updated_at = $now RETURN AFTER")
            .bind(("thing", rid))
            .bind(("available", available))
            .bind(("now", now_millis()))
            .await?
            .take(0)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = parse_record_id(TABLE_TABLE, id)?;
        let deleted: Option<DiningTable> = self.base.db().delete(rid).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Table {id} not found")));
        }
        Ok(())
    }
}
