//! Payment provider client
//!
//! Snap-style gateway: one POST creates a hosted payment page, one GET
//! polls the transaction status. The provider is a trait so tests can
//! swap in a mock without any HTTP.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::db::models::PaymentStatus;
use crate::utils::{AppError, AppResult};

/// Result of creating a gateway transaction
#[derive(Debug, Clone, Deserialize)]
pub struct SnapTransaction {
    pub token: String,
    pub redirect_url: String,
}

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a hosted transaction for the order; returns token + URL
    async fn create_transaction(
        &self,
        order_key: &str,
        gross_amount: f64,
    ) -> AppResult<SnapTransaction>;

    /// Raw `transaction_status` string reported by the gateway
    async fn transaction_status(&self, order_key: &str) -> AppResult<String>;
}

/// Map the gateway's transaction_status vocabulary onto ours
pub fn map_transaction_status(raw: &str) -> PaymentStatus {
    match raw {
        "settlement" | "capture" => PaymentStatus::Settled,
        "cancel" => PaymentStatus::Cancelled,
        "deny" | "expire" | "failure" => PaymentStatus::Failed,
        _ => PaymentStatus::Pending,
    }
}

#[derive(Debug, Serialize)]
struct TransactionDetails<'a> {
    order_id: &'a str,
    gross_amount: f64,
}

#[derive(Debug, Serialize)]
struct CreateTransactionRequest<'a> {
    transaction_details: TransactionDetails<'a>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status_code: String,
    #[serde(default)]
    transaction_status: String,
    #[serde(default)]
    status_message: String,
}

/// HTTP client for the real gateway
pub struct SnapClient {
    http: reqwest::Client,
    endpoint: String,
    auth_header: String,
}

impl SnapClient {
    pub fn new(endpoint: String, server_key: &str) -> Self {
        // Basic auth with the server key as username and empty password
        let auth_header = format!("Basic {}", BASE64.encode(format!("{server_key}:")));
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            auth_header,
        }
    }
}

#[async_trait]
impl PaymentProvider for SnapClient {
    async fn create_transaction(
        &self,
        order_key: &str,
        gross_amount: f64,
    ) -> AppResult<SnapTransaction> {
        let url = format!("{}/snap/v1/transactions", self.endpoint);
        let response = self
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .json(&CreateTransactionRequest {
                transaction_details: TransactionDetails {
                    order_id: order_key,
                    gross_amount,
                },
            })
            .send()
            .await
            .map_err(|e| AppError::gateway(format!("Payment gateway unreachable: {e}")))?;

        if response.status() != reqwest::StatusCode::CREATED {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "Gateway rejected transaction");
            return Err(AppError::gateway(format!(
                "Payment gateway returned {status}"
            )));
        }

        response
            .json::<SnapTransaction>()
            .await
            .map_err(|e| AppError::gateway(format!("Invalid gateway response: {e}")))
    }

    async fn transaction_status(&self, order_key: &str) -> AppResult<String> {
        let url = format!("{}/v2/{order_key}/status", self.endpoint);
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .send()
            .await
            .map_err(|e| AppError::gateway(format!("Payment gateway unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::gateway(format!(
                "Payment gateway returned {}",
                response.status()
            )));
        }

        let body: StatusResponse = response
            .json()
            .await
            .map_err(|e| AppError::gateway(format!("Invalid gateway response: {e}")))?;

        if body.status_code != "200" {
            return Err(AppError::gateway(format!(
                "Gateway status check failed: {} {}",
                body.status_code, body.status_message
            )));
        }
        Ok(body.transaction_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(map_transaction_status("settlement"), PaymentStatus::Settled);
        assert_eq!(map_transaction_status("capture"), PaymentStatus::Settled);
        assert_eq!(map_transaction_status("pending"), PaymentStatus::Pending);
        assert_eq!(map_transaction_status("deny"), PaymentStatus::Failed);
        assert_eq!(map_transaction_status("expire"), PaymentStatus::Failed);
        assert_eq!(map_transaction_status("failure"), PaymentStatus::Failed);
        assert_eq!(map_transaction_status("cancel"), PaymentStatus::Cancelled);
        assert_eq!(map_transaction_status("something"), PaymentStatus::Pending);
    }
}
