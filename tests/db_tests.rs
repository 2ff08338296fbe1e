//! Database bootstrap and index behavior

mod common;

use cakestore_server::db::DbService;
use cakestore_server::db::models::customer::{ROLE_CUSTOMER, ROLE_KITCHEN};
use cakestore_server::db::models::{CustomerCreate, DiningTableCreate};
use cakestore_server::db::repository::{CustomerRepository, DiningTableRepository, RepoError};
use cakestore_server::utils::now_millis;

use common::{seed_customer, test_db};

#[tokio::test]
async fn rocksdb_backend_opens_and_persists() {
    let dir = tempfile::tempdir().expect("temp dir");

    {
        let db = DbService::new(dir.path()).await.expect("open rocksdb");
        seed_customer(&db, "persist@example.com").await;
    }

    // Reopen the same directory and find the row
    let db = DbService::new(dir.path()).await.expect("reopen rocksdb");
    let repo = CustomerRepository::new(db.db.clone());
    let found = repo.find_by_email("persist@example.com").await.unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let db = test_db().await;
    seed_customer(&db, "dup@example.com").await;

    let repo = CustomerRepository::new(db.db.clone());
    let now = now_millis();
    let err = repo
        .create(CustomerCreate {
            name: "Other".to_string(),
            email: "dup@example.com".to_string(),
            password: "hash".to_string(),
            address: "2 Test Street".to_string(),
            role: "customer".to_string(),
            created_at: now,
            updated_at: now,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn role_changes_persist_and_survive_profile_updates() {
    let db = test_db().await;
    let id = seed_customer(&db, "staff@example.com").await.to_string();

    let repo = CustomerRepository::new(db.db.clone());
    let promoted = repo.update_role(&id, ROLE_KITCHEN).await.unwrap();
    assert_eq!(promoted.role, ROLE_KITCHEN);

    let found = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(found.role, ROLE_KITCHEN);

    let demoted = repo.update_role(&id, ROLE_CUSTOMER).await.unwrap();
    assert_eq!(demoted.role, ROLE_CUSTOMER);

    let err = repo
        .update_role("customer:missing", ROLE_KITCHEN)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn duplicate_table_number_is_rejected() {
    let db = test_db().await;
    let repo = DiningTableRepository::new(db.db.clone());

    repo.create(DiningTableCreate {
        number: 7,
        capacity: 4,
    })
    .await
    .unwrap();

    let err = repo
        .create(DiningTableCreate {
            number: 7,
            capacity: 2,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}
