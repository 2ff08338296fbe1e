//! Cart behavior: accumulation, decrement, clearing

mod common;

use cakestore_server::db::repository::{CartRepository, Pagination, RepoError};

use common::{seed_cake, seed_customer, test_db};

#[tokio::test]
async fn adding_same_cake_accumulates_quantity_and_subtotal() {
    let db = test_db().await;
    let customer = seed_customer(&db, "cart1@example.com").await;
    let cake = seed_cake(&db, "Chocolate", 5.0).await;
    let cake_rid = cake.id.unwrap();

    let repo = CartRepository::new(db.db.clone());
    repo.upsert_add(customer.clone(), cake_rid.clone(), 2, 10.0)
        .await
        .unwrap();
    let item = repo
        .upsert_add(customer.clone(), cake_rid.clone(), 3, 15.0)
        .await
        .unwrap();

    assert_eq!(item.quantity, 5);
    assert_eq!(item.subtotal, 25.0);

    // Still a single row for the pair
    let page = repo
        .list_by_customer(customer, &Pagination { page: 1, limit: 10 })
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data.len(), 1);
}

#[tokio::test]
async fn remove_item_decrements_until_row_disappears() {
    let db = test_db().await;
    let customer = seed_customer(&db, "cart2@example.com").await;
    let cake = seed_cake(&db, "Red Velvet", 4.0).await;

    let repo = CartRepository::new(db.db.clone());
    let item = repo
        .upsert_add(customer.clone(), cake.id.unwrap(), 2, 8.0)
        .await
        .unwrap();
    let id = item.id.unwrap().to_string();

    // 2 -> 1: quantity drops, subtotal loses one unit's worth
    repo.remove_item(customer.clone(), &id).await.unwrap();
    let remaining = repo
        .find_by_id(customer.clone(), &id)
        .await
        .unwrap()
        .expect("row still present");
    assert_eq!(remaining.quantity, 1);
    assert_eq!(remaining.subtotal, 4.0);

    // 1 -> 0: row deleted
    repo.remove_item(customer.clone(), &id).await.unwrap();
    assert!(repo.find_by_id(customer.clone(), &id).await.unwrap().is_none());

    // Removing again reports not found
    let err = repo.remove_item(customer, &id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn remove_item_is_scoped_to_the_owner() {
    let db = test_db().await;
    let owner = seed_customer(&db, "owner@example.com").await;
    let intruder = seed_customer(&db, "intruder@example.com").await;
    let cake = seed_cake(&db, "Cheesecake", 6.0).await;

    let repo = CartRepository::new(db.db.clone());
    let item = repo
        .upsert_add(owner.clone(), cake.id.unwrap(), 1, 6.0)
        .await
        .unwrap();
    let id = item.id.unwrap().to_string();

    let err = repo.remove_item(intruder, &id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    // Owner's row untouched
    assert!(repo.find_by_id(owner, &id).await.unwrap().is_some());
}

#[tokio::test]
async fn clear_reports_not_found_on_empty_cart() {
    let db = test_db().await;
    let customer = seed_customer(&db, "cart3@example.com").await;

    let repo = CartRepository::new(db.db.clone());
    let err = repo.clear(customer.clone()).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let cake = seed_cake(&db, "Tiramisu", 7.0).await;
    repo.upsert_add(customer.clone(), cake.id.unwrap(), 1, 7.0)
        .await
        .unwrap();
    assert_eq!(repo.clear(customer).await.unwrap(), 1);
}

#[tokio::test]
async fn bulk_delete_only_touches_listed_rows() {
    let db = test_db().await;
    let customer = seed_customer(&db, "cart4@example.com").await;
    let a = seed_cake(&db, "A", 1.0).await;
    let b = seed_cake(&db, "B", 2.0).await;

    let repo = CartRepository::new(db.db.clone());
    let row_a = repo
        .upsert_add(customer.clone(), a.id.unwrap(), 1, 1.0)
        .await
        .unwrap();
    repo.upsert_add(customer.clone(), b.id.unwrap(), 1, 2.0)
        .await
        .unwrap();

    let removed = repo
        .bulk_delete(customer.clone(), &[row_a.id.unwrap().to_string()])
        .await
        .unwrap();
    assert_eq!(removed, 1);

    let page = repo
        .list_by_customer(customer, &Pagination { page: 1, limit: 10 })
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].cake.title, "B");
}
