//! Inventory stock behavior

mod common;

use cakestore_server::db::models::{InventoryCreate, InventoryUpdate};
use cakestore_server::db::repository::{InventoryRepository, RepoError};

use common::test_db;

fn item(name: &str, quantity: f64, threshold: f64) -> InventoryCreate {
    InventoryCreate {
        name: name.to_string(),
        unit: Some("kg".to_string()),
        quantity,
        low_stock_threshold: Some(threshold),
    }
}

#[tokio::test]
async fn stock_adjustments_are_relative_and_floor_at_zero() {
    let db = test_db().await;
    let repo = InventoryRepository::new(db.db.clone());

    let flour = repo.create(item("Flour", 10.0, 2.0)).await.unwrap();
    let id = flour.id.unwrap().to_string();

    let after = repo.adjust_stock(&id, -3.5).await.unwrap();
    assert_eq!(after.quantity, 6.5);

    let after = repo.adjust_stock(&id, 1.5).await.unwrap();
    assert_eq!(after.quantity, 8.0);

    // Draining more than is on hand stops at zero, never negative
    let after = repo.adjust_stock(&id, -100.0).await.unwrap();
    assert_eq!(after.quantity, 0.0);

    let err = repo.adjust_stock("missing", -1.0).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn low_stock_lists_items_at_or_below_threshold() {
    let db = test_db().await;
    let repo = InventoryRepository::new(db.db.clone());

    repo.create(item("Sugar", 20.0, 5.0)).await.unwrap();
    let butter = repo.create(item("Butter", 6.0, 2.0)).await.unwrap();
    let eggs = repo.create(item("Eggs", 2.0, 12.0)).await.unwrap();

    let low: Vec<String> = repo
        .find_low_stock()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(low, vec!["Eggs".to_string()]);

    // Exactly on the threshold counts as low
    repo.adjust_stock(&butter.id.unwrap().to_string(), -4.0)
        .await
        .unwrap();
    let low = repo.find_low_stock().await.unwrap();
    assert_eq!(low.len(), 2);

    // Restocking clears the listing
    repo.adjust_stock(&eggs.id.unwrap().to_string(), 24.0)
        .await
        .unwrap();
    let low: Vec<String> = repo
        .find_low_stock()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(low, vec!["Butter".to_string()]);
}

#[tokio::test]
async fn update_changes_only_the_given_fields() {
    let db = test_db().await;
    let repo = InventoryRepository::new(db.db.clone());

    let cocoa = repo.create(item("Cocoa", 4.0, 1.0)).await.unwrap();
    let id = cocoa.id.unwrap().to_string();

    let updated = repo
        .update(
            &id,
            InventoryUpdate {
                name: None,
                unit: None,
                quantity: None,
                low_stock_threshold: Some(3.0),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Cocoa");
    assert_eq!(updated.quantity, 4.0);
    assert_eq!(updated.low_stock_threshold, 3.0);
}
