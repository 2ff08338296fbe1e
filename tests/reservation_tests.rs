//! Table booking rules and reservation persistence

mod common;

use cakestore_server::db::models::{DiningTableCreate, ReservationUpdate};
use cakestore_server::db::repository::{DiningTableRepository, Pagination, ReservationRepository};
use cakestore_server::utils::AppError;

use common::{seed_customer, test_db};

#[tokio::test]
async fn booking_rejects_oversized_parties_and_blocked_tables() {
    let db = test_db().await;
    let tables = DiningTableRepository::new(db.db.clone());

    let table = tables
        .create(DiningTableCreate {
            number: 3,
            capacity: 4,
        })
        .await
        .unwrap();
    let id = table.id.clone().unwrap().to_string();

    assert!(table.check_booking(4).is_ok());

    let err = table.check_booking(6).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let blocked = tables.set_availability(&id, false).await.unwrap();
    let err = blocked.check_booking(2).unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // Releasing the table makes it bookable again
    let released = tables.set_availability(&id, true).await.unwrap();
    assert!(released.check_booking(2).is_ok());
}

#[tokio::test]
async fn reservations_are_scoped_to_their_customer() {
    let db = test_db().await;
    let alice = seed_customer(&db, "alice@example.com").await;
    let bob = seed_customer(&db, "bob@example.com").await;

    let tables = DiningTableRepository::new(db.db.clone());
    let table = tables
        .create(DiningTableCreate {
            number: 1,
            capacity: 6,
        })
        .await
        .unwrap();
    let table_rid = table.id.unwrap();

    let repo = ReservationRepository::new(db.db.clone());
    repo.create(alice.clone(), table_rid.clone(), 1_700_000_000_000, 4, None)
        .await
        .unwrap();
    repo.create(
        bob,
        table_rid,
        1_700_000_100_000,
        2,
        Some("window seat".to_string()),
    )
    .await
    .unwrap();

    let page = Pagination { page: 1, limit: 10 };
    let mine = repo.list_by_customer(alice, &page).await.unwrap();
    assert_eq!(mine.total, 1);
    assert_eq!(mine.data[0].guest_count, 4);
    // FETCH pulls the table row into the detail view
    assert_eq!(mine.data[0].dining_table.number, 1);

    let all = repo.list_all(&page).await.unwrap();
    assert_eq!(all.total, 2);
}

#[tokio::test]
async fn update_rewrites_only_the_given_fields() {
    let db = test_db().await;
    let customer = seed_customer(&db, "carol@example.com").await;

    let tables = DiningTableRepository::new(db.db.clone());
    let table = tables
        .create(DiningTableCreate {
            number: 2,
            capacity: 8,
        })
        .await
        .unwrap();

    let repo = ReservationRepository::new(db.db.clone());
    let reservation = repo
        .create(customer, table.id.unwrap(), 1_700_000_000_000, 3, None)
        .await
        .unwrap();
    let id = reservation.id.unwrap().to_string();

    let updated = repo
        .update(
            &id,
            None,
            ReservationUpdate {
                table_id: None,
                reserved_at: None,
                guest_count: Some(5),
                note: Some("birthday".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.guest_count, 5);
    assert_eq!(updated.note.as_deref(), Some("birthday"));
    assert_eq!(updated.reserved_at, 1_700_000_000_000);

    repo.delete(&id).await.unwrap();
    assert!(repo.find_by_id(&id).await.unwrap().is_none());
}
