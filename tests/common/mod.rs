//! Shared test fixtures

use surrealdb::RecordId;

use cakestore_server::db::DbService;
use cakestore_server::db::models::{Cake, CakeCreate, CustomerCreate};
use cakestore_server::db::repository::{CakeRepository, CustomerRepository};
use cakestore_server::utils::now_millis;

pub async fn test_db() -> DbService {
    DbService::memory().await.expect("in-memory db")
}

pub async fn seed_customer(db: &DbService, email: &str) -> RecordId {
    let repo = CustomerRepository::new(db.db.clone());
    let now = now_millis();
    let customer = repo
        .create(CustomerCreate {
            name: "Test Customer".to_string(),
            email: email.to_string(),
            password: "hashed-password".to_string(),
            address: "1 Test Street".to_string(),
            role: "customer".to_string(),
            created_at: now,
            updated_at: now,
        })
        .await
        .expect("seed customer");
    customer.id.expect("customer id")
}

pub async fn seed_cake(db: &DbService, title: &str, price: f64) -> Cake {
    let repo = CakeRepository::new(db.db.clone());
    repo.create(CakeCreate {
        title: title.to_string(),
        description: "A test cake".to_string(),
        rating: 8.0,
        image: "https://example.com/cake.png".to_string(),
        price,
        category: Some("test".to_string()),
    })
    .await
    .expect("seed cake")
}
