//! Order Repository
//!
//! Order creation writes the order row and all of its items in one
//! transaction: either the full order lands or nothing does. The order
//! key is minted client-side so the items can reference it inside the
//! same statement batch.

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use uuid::Uuid;

use super::{BaseRepository, CountRow, Paginated, Pagination, RepoError, RepoResult, parse_record_id};
use crate::db::models::{FoodStatus, Order, OrderDetail, OrderItem, OrderStatus};
use crate::utils::now_millis;

const ORDER_TABLE: &str = "order";

/// Item payload bound into the creation transaction
#[derive(Debug, Clone, Serialize)]
pub struct NewOrderItem {
    pub cake: RecordId,
    pub quantity: i64,
    pub price: f64,
    pub subtotal: f64,
}

/// Subquery that attaches the fetched items to each order row
const DETAIL_PROJECTION: &str = "SELECT *, \
    (SELECT * FROM order_item WHERE order_id = $parent.id ORDER BY created_at FETCH cake) AS items \
    FROM order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create the order and its items atomically; returns the new order id
    pub async fn create_with_items(
        &self,
        customer: RecordId,
        total_price: f64,
        delivery_address: String,
        items: Vec<NewOrderItem>,
    ) -> RepoResult<Order> {
        let key = Uuid::new_v4().to_string();
        let now = now_millis();

        self.base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $order_id = type::thing('order', $key);
                CREATE $order_id CONTENT {
                    customer: $customer,
                    status: 'pending',
                    food_status: 'pending',
                    total_price: $total_price,
                    delivery_address: $delivery_address,
                    created_at: $now,
                    updated_at: $now,
                };
                FOR $item IN $items {
                    CREATE order_item CONTENT {
                        order_id: $order_id,
                        cake: $item.cake,
                        quantity: $item.quantity,
                        price: $item.price,
                        subtotal: $item.subtotal,
                        created_at: $now,
                        updated_at: $now,
                    };
                };
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("key", key.clone()))
            .bind(("customer", customer))
            .bind(("total_price", total_price))
            .bind(("delivery_address", delivery_address))
            .bind(("items", items))
            .bind(("now", now))
            .await?
            .check()?;

        self.find_by_id(&key)
            .await?
            .ok_or_else(|| RepoError::Database("Order missing after create".to_string()))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let rid = parse_record_id(ORDER_TABLE, id)?;
        let order: Option<Order> = self.base.db().select(rid).await?;
        Ok(order)
    }

    /// Fully populated order: customer plus items with their cakes
    pub async fn get_detail(&self, id: &str) -> RepoResult<Option<OrderDetail>> {
        let rid = parse_record_id(ORDER_TABLE, id)?;
        let rows: Vec<OrderDetail> = self
            .base
            .db()
            .query(format!("{DETAIL_PROJECTION} WHERE id = $id FETCH customer"))
            .bind(("id", rid))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next())
    }

    /// The customer's own orders, newest first
    pub async fn list_by_customer(
        &self,
        customer: RecordId,
        page: &Pagination,
    ) -> RepoResult<Paginated<OrderDetail>> {
        let counts: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() AS count FROM order WHERE customer = $customer GROUP ALL")
            .bind(("customer", customer.clone()))
            .await?
            .take(0)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        let rows: Vec<OrderDetail> = self
            .base
            .db()
            .query(format!(
                "{DETAIL_PROJECTION} WHERE customer = $customer ORDER BY created_at DESC \
                 LIMIT $limit START $start FETCH customer"
            ))
            .bind(("customer", customer))
            .bind(("limit", page.limit))
            .bind(("start", page.offset()))
            .await?
            .take(0)?;

        Ok(Paginated::new(rows, total, page))
    }

    /// Every order in the store (staff view)
    pub async fn list_all(&self, page: &Pagination) -> RepoResult<Paginated<OrderDetail>> {
        let counts: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() AS count FROM order GROUP ALL")
            .await?
            .take(0)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        let rows: Vec<OrderDetail> = self
            .base
            .db()
            .query(format!(
                "{DETAIL_PROJECTION} ORDER BY created_at DESC \
                 LIMIT $limit START $start FETCH customer"
            ))
            .bind(("limit", page.limit))
            .bind(("start", page.offset()))
            .await?
            .take(0)?;

        Ok(Paginated::new(rows, total, page))
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let rid = parse_record_id(ORDER_TABLE, id)?;
        let updated: Vec<Order> = self
            .base
            .db()
            .query("UPDATE $id SET status = $status, updated_at = $now RETURN AFTER")
            .bind(("id", rid))
            .bind(("status", status))
            .bind(("now", now_millis()))
            .await?
            .take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
    }

    pub async fn update_food_status(&self, id: &str, status: FoodStatus) -> RepoResult<Order> {
        let rid = parse_record_id(ORDER_TABLE, id)?;
        let updated: Vec<Order> = self
            .base
            .db()
            .query("UPDATE $id SET food_status = $status, updated_at = $now RETURN AFTER")
            .bind(("id", rid))
            .bind(("status", status))
            .bind(("now", now_millis()))
            .await?
            .take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
    }

    /// Delete the order with its items and payment, all in one transaction
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = parse_record_id(ORDER_TABLE, id)?;
        let result = self
            .base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $existing = (SELECT * FROM ONLY $id);
                IF $existing == NONE {
                    THROW "order not found";
                };
                DELETE order_item WHERE order_id = $id;
                DELETE payment WHERE order_id = $id;
                DELETE $id;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("id", rid))
            .await?
            .check();

        match result {
            Ok(_) => Ok(()),
            Err(e) if e.to_string().contains("order not found") => {
                Err(RepoError::NotFound(format!("Order {id} not found")))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list_items(&self, order_id: RecordId) -> RepoResult<Vec<OrderItem>> {
        let rows: Vec<OrderItem> = self
            .base
            .db()
            .query("SELECT * FROM order_item WHERE order_id = $order_id ORDER BY created_at")
            .bind(("order_id", order_id))
            .await?
            .take(0)?;
        Ok(rows)
    }
}
