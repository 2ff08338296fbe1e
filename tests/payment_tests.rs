//! Payment lifecycle against a mocked gateway

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use cakestore_server::db::DbService;
use cakestore_server::db::models::{OrderCreate, OrderStatus, PaymentStatus};
use cakestore_server::db::repository::CartRepository;
use cakestore_server::orders::OrderService;
use cakestore_server::payment::{
    PaymentNotification, PaymentProvider, PaymentService, SnapTransaction,
};
use cakestore_server::utils::{AppError, AppResult};

use common::{seed_cake, seed_customer, test_db};

struct MockGateway {
    fail_create: bool,
    status: String,
    create_calls: AtomicUsize,
}

impl MockGateway {
    fn ok(status: &str) -> Self {
        Self {
            fail_create: false,
            status: status.to_string(),
            create_calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            fail_create: true,
            status: "pending".to_string(),
            create_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockGateway {
    async fn create_transaction(
        &self,
        order_key: &str,
        _gross_amount: f64,
    ) -> AppResult<SnapTransaction> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create {
            return Err(AppError::gateway("Payment gateway returned 500"));
        }
        Ok(SnapTransaction {
            token: format!("token-{order_key}"),
            redirect_url: format!("https://pay.example.com/{order_key}"),
        })
    }

    async fn transaction_status(&self, _order_key: &str) -> AppResult<String> {
        Ok(self.status.clone())
    }
}

async fn place_order(db: &DbService, email: &str) -> (OrderService, String) {
    let customer = seed_customer(db, email).await;
    let cake = seed_cake(db, "Chocolate", 12.5).await;

    let carts = CartRepository::new(db.db.clone());
    carts
        .upsert_add(customer.clone(), cake.id.unwrap(), 2, 25.0)
        .await
        .unwrap();

    let orders = OrderService::new(db);
    let order = orders
        .create_order(
            customer,
            OrderCreate {
                delivery_address: "1 Test Street".to_string(),
            },
        )
        .await
        .unwrap();
    (orders, order.id.unwrap().to_string())
}

fn service(
    db: &DbService,
    orders: OrderService,
    gateway: Arc<MockGateway>,
    sync: bool,
) -> PaymentService {
    PaymentService::new(db, orders, gateway, sync, true)
}

#[tokio::test]
async fn creating_payment_persists_pending_row() {
    let db = test_db().await;
    let (orders, order_id) = place_order(&db, "pay1@example.com").await;
    let gateway = Arc::new(MockGateway::ok("pending"));
    let payments = service(&db, orders, gateway.clone(), true);

    let payment = payments.create_payment_url(&order_id).await.unwrap();
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.amount, 25.0);
    assert!(payment.payment_url.starts_with("https://pay.example.com/"));

    // Second call returns the same payment without a second gateway hit
    let again = payments.create_payment_url(&order_id).await.unwrap();
    assert_eq!(again.payment_token, payment.payment_token);
    assert_eq!(gateway.create_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn gateway_failure_leaves_no_payment_behind() {
    let db = test_db().await;
    let (orders, order_id) = place_order(&db, "pay2@example.com").await;
    let payments = service(&db, orders, Arc::new(MockGateway::failing()), true);

    let err = payments.create_payment_url(&order_id).await.unwrap_err();
    assert!(matches!(err, AppError::Gateway(_)));

    let err = payments.get_payment(&order_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn settlement_notification_marks_payment_and_order() {
    let db = test_db().await;
    let (orders, order_id) = place_order(&db, "pay3@example.com").await;
    let gateway = Arc::new(MockGateway::ok("settlement"));
    let payments = service(&db, orders.clone(), gateway, true);

    payments.create_payment_url(&order_id).await.unwrap();

    let payment = payments
        .handle_notification(PaymentNotification {
            order_id: Some(order_id.clone()),
            transaction_status: Some("settlement".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Settled);

    let order = orders.find_order(&order_id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Paid);
}

#[tokio::test]
async fn sync_can_be_disabled() {
    let db = test_db().await;
    let (orders, order_id) = place_order(&db, "pay4@example.com").await;
    let gateway = Arc::new(MockGateway::ok("settlement"));
    let payments = service(&db, orders.clone(), gateway, false);

    payments.create_payment_url(&order_id).await.unwrap();
    payments
        .handle_notification(PaymentNotification {
            order_id: Some(order_id.clone()),
            transaction_status: Some("settlement".to_string()),
        })
        .await
        .unwrap();

    // Payment settled, order untouched
    let payment = payments.get_payment(&order_id).await.unwrap();
    assert_eq!(payment.status, PaymentStatus::Settled);
    let order = orders.find_order(&order_id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
}

#[tokio::test]
async fn replayed_settlement_repairs_a_stale_order() {
    let db = test_db().await;
    let (orders, order_id) = place_order(&db, "pay7@example.com").await;
    let gateway = Arc::new(MockGateway::ok("settlement"));

    // First delivery lands while sync is off: payment settles, the
    // order stays pending
    let unsynced = service(&db, orders.clone(), gateway.clone(), false);
    unsynced.create_payment_url(&order_id).await.unwrap();
    unsynced
        .handle_notification(PaymentNotification {
            order_id: Some(order_id.clone()),
            transaction_status: Some("settlement".to_string()),
        })
        .await
        .unwrap();
    let order = orders.find_order(&order_id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    // The gateway replays the same notification; the stored status does
    // not change but the order still gets reconciled
    let synced = service(&db, orders.clone(), gateway, true);
    let payment = synced
        .handle_notification(PaymentNotification {
            order_id: Some(order_id.clone()),
            transaction_status: Some("settlement".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Settled);

    let order = orders.find_order(&order_id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Paid);
}

#[tokio::test]
async fn notification_without_order_id_falls_back_to_latest_pending() {
    let db = test_db().await;
    let (orders, order_id) = place_order(&db, "pay5@example.com").await;
    let gateway = Arc::new(MockGateway::ok("settlement"));
    let payments = service(&db, orders, gateway, true);

    payments.create_payment_url(&order_id).await.unwrap();

    // Sandbox notifications carry gateway-side ids; status comes from the
    // gateway status endpoint
    let payment = payments
        .handle_notification(PaymentNotification {
            order_id: None,
            transaction_status: None,
        })
        .await
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Settled);
}

#[tokio::test]
async fn failed_status_cancels_the_order() {
    let db = test_db().await;
    let (orders, order_id) = place_order(&db, "pay6@example.com").await;
    let gateway = Arc::new(MockGateway::ok("expire"));
    let payments = service(&db, orders.clone(), gateway, true);

    payments.create_payment_url(&order_id).await.unwrap();
    let payment = payments
        .handle_notification(PaymentNotification {
            order_id: Some(order_id.clone()),
            transaction_status: Some("expire".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Failed);

    let order = orders.find_order(&order_id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
}
