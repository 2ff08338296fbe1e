//! Payment Service
//!
//! Drives the payment lifecycle: one payment row per order, created
//! against the gateway and mutated only by notifications.

pub mod provider;

use std::sync::Arc;

use serde::Deserialize;
use surrealdb::RecordId;

use crate::db::DbService;
use crate::db::models::{Payment, PaymentStatus};
use crate::db::repository::{PaymentRepository, RepoError};
use crate::orders::OrderService;
use crate::utils::{AppError, AppResult};

pub use provider::{PaymentProvider, SnapClient, SnapTransaction, map_transaction_status};

/// Gateway webhook body. Only the fields we act on; everything else in
/// the notification is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentNotification {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub transaction_status: Option<String>,
}

#[derive(Clone)]
pub struct PaymentService {
    payments: PaymentRepository,
    orders: OrderService,
    provider: Arc<dyn PaymentProvider>,
    /// Mirror payment outcomes onto order status (PAYMENT_SYNC_ORDER_STATUS)
    sync_order_status: bool,
    /// Development relaxation: notifications without an order id resolve
    /// to the most recent pending payment
    dev_fallback: bool,
}

impl PaymentService {
    pub fn new(
        db: &DbService,
        orders: OrderService,
        provider: Arc<dyn PaymentProvider>,
        sync_order_status: bool,
        dev_fallback: bool,
    ) -> Self {
        Self {
            payments: PaymentRepository::new(db.db.clone()),
            orders,
            provider,
            sync_order_status,
            dev_fallback,
        }
    }

    /// Create (or return the existing) payment for an order.
    ///
    /// Idempotent: repeated calls never hit the gateway twice for the
    /// same order. The gateway call happens before the insert, so a
    /// gateway failure leaves no payment row behind.
    pub async fn create_payment_url(&self, order_id: &str) -> AppResult<Payment> {
        let order = self.orders.find_order(order_id).await?;
        let order_rid = order
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Order row has no id"))?;

        if let Some(existing) = self.payments.find_by_order(order_rid.clone()).await? {
            return Ok(existing);
        }

        let order_key = order_rid.key().to_string();
        let txn = self
            .provider
            .create_transaction(&order_key, order.total_price)
            .await?;

        match self
            .payments
            .create(
                order_rid.clone(),
                order.total_price,
                txn.token,
                txn.redirect_url,
            )
            .await
        {
            Ok(payment) => {
                tracing::info!(order = %order_rid, "Payment created");
                Ok(payment)
            }
            // Lost a create race; the unique index kept the 1:1 shape
            Err(RepoError::Duplicate(_)) => self
                .payments
                .find_by_order(order_rid)
                .await?
                .ok_or_else(|| AppError::database("Payment vanished after duplicate insert")),
            Err(e) => Err(e.into()),
        }
    }

    /// Stored payment for an order
    pub async fn get_payment(&self, order_id: &str) -> AppResult<Payment> {
        let order = self.orders.find_order(order_id).await?;
        let order_rid = order
            .id
            .ok_or_else(|| AppError::internal("Order row has no id"))?;
        self.payments
            .find_by_order(order_rid)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No payment for order {order_id}")))
    }

    /// Apply a gateway notification.
    ///
    /// The reported status is never trusted as-is when absent: we ask
    /// the gateway for the transaction status ourselves.
    pub async fn handle_notification(&self, body: PaymentNotification) -> AppResult<Payment> {
        let payment = self.resolve_payment(body.order_id.as_deref()).await?;
        let order_rid = payment.order_id.clone();
        let order_key = order_rid.key().to_string();

        let raw_status = match body.transaction_status {
            Some(s) => s,
            None => self.provider.transaction_status(&order_key).await?,
        };
        let new_status = map_transaction_status(&raw_status);

        let updated = if new_status == payment.status {
            payment
        } else {
            let updated = self
                .payments
                .update_status_by_order(order_rid.clone(), new_status)
                .await?;
            tracing::info!(order = %order_rid, status = %new_status, "Payment status updated");
            updated
        };

        // Sync runs even when the stored status is unchanged: gateways
        // replay notifications, and a replay is the only chance to repair
        // an order the first delivery failed to move.
        if self.sync_order_status {
            self.orders
                .sync_from_payment(&order_rid.to_string(), new_status)
                .await?;
        }
        Ok(updated)
    }

    async fn resolve_payment(&self, order_id: Option<&str>) -> AppResult<Payment> {
        if let Some(id) = order_id {
            let rid: RecordId = if id.contains(':') {
                id.parse()
                    .map_err(|_| AppError::validation(format!("Invalid order id: {id}")))?
            } else {
                RecordId::from_table_key("order", id)
            };
            if let Some(payment) = self.payments.find_by_order(rid).await? {
                return Ok(payment);
            }
            if !self.dev_fallback {
                return Err(AppError::not_found(format!("No payment for order {id}")));
            }
        } else if !self.dev_fallback {
            return Err(AppError::validation("Notification missing order_id"));
        }

        // Sandbox notifications carry gateway-side test ids; take the
        // most recent pending payment instead
        self.payments
            .find_latest_pending()
            .await?
            .ok_or_else(|| AppError::not_found("No pending payment to reconcile"))
    }
}
