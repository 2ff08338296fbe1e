//! Order assembly and status lifecycles

mod common;

use cakestore_server::db::models::{FoodStatus, OrderCreate, OrderStatus};
use cakestore_server::db::repository::{CartRepository, Pagination};
use cakestore_server::orders::OrderService;
use cakestore_server::utils::AppError;

use common::{seed_cake, seed_customer, test_db};

fn order_request() -> OrderCreate {
    OrderCreate {
        delivery_address: "1 Test Street".to_string(),
    }
}

#[tokio::test]
async fn checkout_with_empty_cart_is_rejected() {
    let db = test_db().await;
    let customer = seed_customer(&db, "orders1@example.com").await;

    let service = OrderService::new(&db);
    let err = service
        .create_order(customer.clone(), order_request())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // Nothing persisted
    let page = service
        .list_customer_orders(customer, &Pagination { page: 1, limit: 10 })
        .await
        .unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn checkout_snapshots_cart_and_clears_it() {
    let db = test_db().await;
    let customer = seed_customer(&db, "orders2@example.com").await;
    let chocolate = seed_cake(&db, "Chocolate", 5.0).await;
    let velvet = seed_cake(&db, "Red Velvet", 7.5).await;

    let carts = CartRepository::new(db.db.clone());
    carts
        .upsert_add(customer.clone(), chocolate.id.unwrap(), 2, 10.0)
        .await
        .unwrap();
    carts
        .upsert_add(customer.clone(), velvet.id.unwrap(), 2, 15.0)
        .await
        .unwrap();

    let service = OrderService::new(&db);
    let order = service
        .create_order(customer.clone(), order_request())
        .await
        .unwrap();

    assert_eq!(order.total_price, 25.0);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.food_status, FoodStatus::Pending);

    // Cart emptied after the order committed
    let remaining = carts.list_all_by_customer(customer.clone()).await.unwrap();
    assert!(remaining.is_empty());

    // Detail view carries items with their cakes
    let detail = service
        .get_order(&order.id.unwrap().to_string())
        .await
        .unwrap();
    assert_eq!(detail.items.len(), 2);
    assert_eq!(detail.customer.email, "orders2@example.com");
    let titles: Vec<&str> = detail.items.iter().map(|i| i.cake.title.as_str()).collect();
    assert!(titles.contains(&"Chocolate"));
    assert!(titles.contains(&"Red Velvet"));
}

#[tokio::test]
async fn food_status_must_follow_the_lifecycle() {
    let db = test_db().await;
    let customer = seed_customer(&db, "orders3@example.com").await;
    let cake = seed_cake(&db, "Tiramisu", 6.0).await;

    let carts = CartRepository::new(db.db.clone());
    carts
        .upsert_add(customer.clone(), cake.id.unwrap(), 1, 6.0)
        .await
        .unwrap();

    let service = OrderService::new(&db);
    let order = service.create_order(customer, order_request()).await.unwrap();
    let id = order.id.unwrap().to_string();

    // pending -> ready skips cooking
    let err = service
        .update_food_status(&id, FoodStatus::Ready)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));

    let order = service
        .update_food_status(&id, FoodStatus::Cooking)
        .await
        .unwrap();
    assert_eq!(order.food_status, FoodStatus::Cooking);

    let order = service
        .update_food_status(&id, FoodStatus::Ready)
        .await
        .unwrap();
    assert_eq!(order.food_status, FoodStatus::Ready);

    let order = service
        .update_food_status(&id, FoodStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(order.food_status, FoodStatus::Delivered);

    // delivered cannot go back into the kitchen flow
    let err = service
        .update_food_status(&id, FoodStatus::Cooking)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
}

#[tokio::test]
async fn order_status_rejects_backwards_moves() {
    let db = test_db().await;
    let customer = seed_customer(&db, "orders4@example.com").await;
    let cake = seed_cake(&db, "Cheesecake", 9.0).await;

    let carts = CartRepository::new(db.db.clone());
    carts
        .upsert_add(customer.clone(), cake.id.unwrap(), 1, 9.0)
        .await
        .unwrap();

    let service = OrderService::new(&db);
    let order = service.create_order(customer, order_request()).await.unwrap();
    let id = order.id.unwrap().to_string();

    let order = service.update_status(&id, OrderStatus::Paid).await.unwrap();
    assert_eq!(order.status, OrderStatus::Paid);

    let err = service
        .update_status(&id, OrderStatus::Pending)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
}

#[tokio::test]
async fn listing_paginates_with_integer_division() {
    let db = test_db().await;
    let customer = seed_customer(&db, "orders5@example.com").await;
    let cake = seed_cake(&db, "Brownie", 2.0).await;
    let cake_rid = cake.id.unwrap();

    let carts = CartRepository::new(db.db.clone());
    let service = OrderService::new(&db);
    for _ in 0..25 {
        carts
            .upsert_add(customer.clone(), cake_rid.clone(), 1, 2.0)
            .await
            .unwrap();
        service
            .create_order(customer.clone(), order_request())
            .await
            .unwrap();
    }

    let page1 = service
        .list_customer_orders(customer.clone(), &Pagination { page: 1, limit: 10 })
        .await
        .unwrap();
    assert_eq!(page1.total, 25);
    assert_eq!(page1.data.len(), 10);
    assert_eq!(page1.total_pages, 2);

    // Out-of-range page: empty data, same metadata
    let page9 = service
        .list_customer_orders(customer, &Pagination { page: 9, limit: 10 })
        .await
        .unwrap();
    assert_eq!(page9.total, 25);
    assert!(page9.data.is_empty());
}

#[tokio::test]
async fn delete_removes_order_and_items() {
    let db = test_db().await;
    let customer = seed_customer(&db, "orders6@example.com").await;
    let cake = seed_cake(&db, "Macaron", 3.0).await;

    let carts = CartRepository::new(db.db.clone());
    carts
        .upsert_add(customer.clone(), cake.id.unwrap(), 2, 6.0)
        .await
        .unwrap();

    let service = OrderService::new(&db);
    let order = service.create_order(customer, order_request()).await.unwrap();
    let id = order.id.unwrap().to_string();

    service.delete_order(&id).await.unwrap();
    let err = service.get_order(&id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
