//! Cart Repository
//!
//! Every mutation runs as one SurrealQL transaction so that concurrent
//! calls for the same row cannot interleave a read-modify-write. The
//! original decrement logic (read quantity/subtotal, then update) lost
//! updates under concurrency; here the arithmetic happens inside the
//! transaction against the row the transaction read.

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, CountRow, Paginated, Pagination, RepoError, RepoResult, parse_record_id};
use crate::db::models::{CartItem, CartItemDetail};
use crate::utils::now_millis;

const CART_TABLE: &str = "cart";

const NOT_FOUND_MARKER: &str = "cart item not found";

#[derive(Clone)]
pub struct CartRepository {
    base: BaseRepository,
}

impl CartRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Merge `quantity` units (worth `line_amount` in total) into the
    /// (customer, cake) row, creating it when absent. Single transaction.
    pub async fn upsert_add(
        &self,
        customer: RecordId,
        cake: RecordId,
        quantity: i64,
        line_amount: f64,
    ) -> RepoResult<CartItem> {
        let now = now_millis();
        self.base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $existing = (SELECT * FROM cart WHERE customer = $customer AND cake = $cake LIMIT 1);
                IF array::len($existing) > 0 {
                    UPDATE $existing[0].id SET
                        quantity += $quantity,
                        subtotal += $line_amount,
                        updated_at = $now;
                } ELSE {
                    CREATE cart CONTENT {
                        customer: $customer,
                        cake: $cake,
                        quantity: $quantity,
                        subtotal: $line_amount,
                        created_at: $now,
                        updated_at: $now,
                    };
                };
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("customer", customer.clone()))
            .bind(("cake", cake.clone()))
            .bind(("quantity", quantity))
            .bind(("line_amount", line_amount))
            .bind(("now", now))
            .await?
            .check()?;

        self.find_by_customer_and_cake(customer, cake)
            .await?
            .ok_or_else(|| RepoError::Database("Cart row missing after upsert".to_string()))
    }

    pub async fn find_by_customer_and_cake(
        &self,
        customer: RecordId,
        cake: RecordId,
    ) -> RepoResult<Option<CartItem>> {
        let rows: Vec<CartItem> = self
            .base
            .db()
            .query("SELECT * FROM cart WHERE customer = $customer AND cake = $cake LIMIT 1")
            .bind(("customer", customer))
            .bind(("cake", cake))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Find a cart row (scoped to its owner) with the cake fetched
    pub async fn find_by_id(
        &self,
        customer: RecordId,
        id: &str,
    ) -> RepoResult<Option<CartItemDetail>> {
        let rid = parse_record_id(CART_TABLE, id)?;
        let rows: Vec<CartItemDetail> = self
            .base
            .db()
            .query("SELECT * FROM cart WHERE id = $id AND customer = $customer FETCH cake")
            .bind(("id", rid))
            .bind(("customer", customer))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Page of the customer's cart rows, cake records included
    pub async fn list_by_customer(
        &self,
        customer: RecordId,
        page: &Pagination,
    ) -> RepoResult<Paginated<CartItemDetail>> {
        let counts: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() AS count FROM cart WHERE customer = $customer GROUP ALL")
            .bind(("customer", customer.clone()))
            .await?
            .take(0)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        let rows: Vec<CartItemDetail> = self
            .base
            .db()
            .query(
                "SELECT * FROM cart WHERE customer = $customer ORDER BY created_at \
                 LIMIT $limit START $start FETCH cake",
            )
            .bind(("customer", customer))
            .bind(("limit", page.limit))
            .bind(("start", page.offset()))
            .await?
            .take(0)?;

        Ok(Paginated::new(rows, total, page))
    }

    /// All rows for a customer, unpaginated (order assembly)
    pub async fn list_all_by_customer(&self, customer: RecordId) -> RepoResult<Vec<CartItem>> {
        let rows: Vec<CartItem> = self
            .base
            .db()
            .query("SELECT * FROM cart WHERE customer = $customer ORDER BY created_at")
            .bind(("customer", customer))
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Remove one unit: delete the row at quantity <= 1, otherwise decrement
    /// quantity and subtract the per-unit amount (subtotal / quantity).
    /// One transaction end to end.
    pub async fn remove_item(&self, customer: RecordId, id: &str) -> RepoResult<()> {
        let rid = parse_record_id(CART_TABLE, id)?;
        let result = self
            .base
            .db()
            .query(format!(
                r#"
                BEGIN TRANSACTION;
                LET $row = (SELECT * FROM ONLY $id WHERE customer = $customer);
                IF $row == NONE {{
                    THROW "{NOT_FOUND_MARKER}";
                }};
                IF $row.quantity <= 1 {{
                    DELETE $id;
                }} ELSE {{
                    UPDATE $id SET
                        subtotal -= $row.subtotal / $row.quantity,
                        quantity -= 1,
                        updated_at = $now;
                }};
                COMMIT TRANSACTION;
                "#
            ))
            .bind(("id", rid))
            .bind(("customer", customer))
            .bind(("now", now_millis()))
            .await?
            .check();

        match result {
            Ok(_) => Ok(()),
            Err(e) if e.to_string().contains(NOT_FOUND_MARKER) => {
                Err(RepoError::NotFound(format!("Cart item {id} not found")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete every row for the customer; zero rows affected is NotFound
    pub async fn clear(&self, customer: RecordId) -> RepoResult<u64> {
        let deleted: Vec<CartItem> = self
            .base
            .db()
            .query("DELETE cart WHERE customer = $customer RETURN BEFORE")
            .bind(("customer", customer))
            .await?
            .take(0)?;
        if deleted.is_empty() {
            return Err(RepoError::NotFound("Cart is already empty".to_string()));
        }
        Ok(deleted.len() as u64)
    }

    /// Delete selected rows (scoped to the owner); returns rows removed
    pub async fn bulk_delete(&self, customer: RecordId, ids: &[String]) -> RepoResult<u64> {
        let mut rids: Vec<RecordId> = Vec::with_capacity(ids.len());
        for id in ids {
            rids.push(parse_record_id(CART_TABLE, id)?);
        }
        let deleted: Vec<CartItem> = self
            .base
            .db()
            .query("DELETE cart WHERE id INSIDE $ids AND customer = $customer RETURN BEFORE")
            .bind(("ids", rids))
            .bind(("customer", customer))
            .await?
            .take(0)?;
        Ok(deleted.len() as u64)
    }
}
