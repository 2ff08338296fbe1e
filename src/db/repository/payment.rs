//! Payment Repository
//!
//! One row per order, enforced by the unique `order_id` index.

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Payment, PaymentStatus};
use crate::utils::now_millis;

const PAYMENT_TABLE: &str = "payment";

#[derive(Debug, Serialize)]
struct PaymentInsert {
    order_id: RecordId,
    amount: f64,
    status: PaymentStatus,
    payment_token: String,
    payment_url: String,
    created_at: i64,
    updated_at: i64,
}

#[derive(Clone)]
pub struct PaymentRepository {
    base: BaseRepository,
}

impl PaymentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(
        &self,
        order_id: RecordId,
        amount: f64,
        payment_token: String,
        payment_url: String,
    ) -> RepoResult<Payment> {
        let now = now_millis();
        let created: Option<Payment> = self
            .base
            .db()
            .create(PAYMENT_TABLE)
            .content(PaymentInsert {
                order_id,
                amount,
                status: PaymentStatus::Pending,
                payment_token,
                payment_url,
                created_at: now,
                updated_at: now,
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create payment".to_string()))
    }

    pub async fn find_by_order(&self, order_id: RecordId) -> RepoResult<Option<Payment>> {
        let rows: Vec<Payment> = self
            .base
            .db()
            .query("SELECT * FROM payment WHERE order_id = $order_id LIMIT 1")
            .bind(("order_id", order_id))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next())
    }

    pub async fn update_status_by_order(
        &self,
        order_id: RecordId,
        status: PaymentStatus,
    ) -> RepoResult<Payment> {
        let updated: Vec<Payment> = self
            .base
            .db()
            .query(
                "UPDATE payment SET status = $status, updated_at = $now \
                 WHERE order_id = $order_id RETURN AFTER",
            )
            .bind(("order_id", order_id.clone()))
            .bind(("status", status))
            .bind(("now", now_millis()))
            .await?
            .take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Payment for {order_id} not found")))
    }

    /// Most recently created pending payment (development notification fallback)
    pub async fn find_latest_pending(&self) -> RepoResult<Option<Payment>> {
        let rows: Vec<Payment> = self
            .base
            .db()
            .query(
                "SELECT * FROM payment WHERE status = 'pending' \
                 ORDER BY created_at DESC LIMIT 1",
            )
            .await?
            .take(0)?;
        Ok(rows.into_iter().next())
    }
}
