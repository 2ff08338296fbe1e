//! Reservation Repository

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, CountRow, Paginated, Pagination, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Reservation, ReservationDetail, ReservationUpdate};
use crate::utils::now_millis;

const RESERVATION_TABLE: &str = "reservation";

#[derive(Debug, Serialize)]
struct ReservationInsert {
    customer: RecordId,
    dining_table: RecordId,
    reserved_at: i64,
    guest_count: i32,
    note: Option<String>,
    created_at: i64,
    updated_at: i64,
}

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(
        &self,
        customer: RecordId,
        dining_table: RecordId,
        reserved_at: i64,
        guest_count: i32,
        note: Option<String>,
    ) -> RepoResult<Reservation> {
        let now = now_millis();
        let created: Option<Reservation> = self
            .base
            .db()
            .create(RESERVATION_TABLE)
            .content(ReservationInsert {
                customer,
                dining_table,
                reserved_at,
                guest_count,
                note,
                created_at: now,
                updated_at: now,
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let rid = parse_record_id(RESERVATION_TABLE, id)?;
        let row: Option<Reservation> = self.base.db().select(rid).await?;
        Ok(row)
    }

    pub async fn find_detail_by_id(&self, id: &str) -> RepoResult<Option<ReservationDetail>> {
        let rid = parse_record_id(RESERVATION_TABLE, id)?;
        let rows: Vec<ReservationDetail> = self
            .base
            .db()
            .query("SELECT * FROM reservation WHERE id = $id FETCH dining_table")
            .bind(("id", rid))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next())
    }

    pub async fn list_by_customer(
        &self,
        customer: RecordId,
        page: &Pagination,
    ) -> RepoResult<Paginated<ReservationDetail>> {
        let counts: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() AS count FROM reservation WHERE customer = $customer GROUP ALL")
            .bind(("customer", customer.clone()))
            .await?
            .take(0)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        let rows: Vec<ReservationDetail> = self
            .base
            .db()
            .query(
                "SELECT * FROM reservation WHERE customer = $customer ORDER BY reserved_at \
                 LIMIT $limit START $start FETCH dining_table",
            )
            .bind(("customer", customer))
            .bind(("limit", page.limit))
            .bind(("start", page.offset()))
            .await?
            .take(0)?;

        Ok(Paginated::new(rows, total, page))
    }

    pub async fn list_all(&self, page: &Pagination) -> RepoResult<Paginated<ReservationDetail>> {
        let counts: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() AS count FROM reservation GROUP ALL")
            .await?
            .take(0)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        let rows: Vec<ReservationDetail> = self
            .base
            .db()
            .query(
                "SELECT * FROM reservation ORDER BY reserved_at \
                 LIMIT $limit START $start FETCH dining_table",
            )
            .bind(("limit", page.limit))
            .bind(("start", page.offset()))
            .await?
            .take(0)?;

        Ok(Paginated::new(rows, total, page))
    }

    pub async fn update(
        &self,
        id: &str,
        dining_table: Option<RecordId>,
        data: ReservationUpdate,
    ) -> RepoResult<Reservation> {
        let rid = parse_record_id(RESERVATION_TABLE, id)?;

        let mut set_parts: Vec<&str> = Vec::new();
        if dining_table.is_some() {
            set_parts.push("dining_table = $dining_table");
        }
        if data.reserved_at.is_some() {
            set_parts.push("reserved_at = $reserved_at");
        }
        if data.guest_count.is_some() {
            set_parts.push("guest_count = $guest_count");
        }
        if data.note.is_some() {
            set_parts.push("note = $note");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")));
        }
        set_parts.push("updated_at = $now");

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self
            .base
            .db()
            .query(&query_str)
            .bind(("thing", rid))
            .bind(("now", now_millis()));
        if let Some(v) = dining_table {
            query = query.bind(("dining_table", v));
        }
        if let Some(v) = data.reserved_at {
            query = query.bind(("reserved_at", v));
        }
        if let Some(v) = data.guest_count {
            query = query.bind(("guest_count", v));
        }
        if let Some(v) = data.note {
            query = query.bind(("note", v));
        }

        let rows: Vec<Reservation> = query.await?.take(0)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = parse_record_id(RESERVATION_TABLE, id)?;
        let deleted: Option<Reservation> = self.base.db().delete(rid).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Reservation {id} not found")));
        }
        Ok(())
    }
}
