//! Customer Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Customer, CustomerCreate, CustomerUpdate};
use crate::utils::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const CUSTOMER_TABLE: &str = "customer";

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert a new customer; the unique email index rejects duplicates
    pub async fn create(&self, data: CustomerCreate) -> RepoResult<Customer> {
        let created: Option<Customer> = self
            .base
            .db()
            .create(CUSTOMER_TABLE)
            .content(data)
            .await
            .map_err(|e| match RepoError::from(e) {
                RepoError::Duplicate(_) => {
                    RepoError::Duplicate("Email already registered".to_string())
                }
                other => other,
            })?;
        created.ok_or_else(|| RepoError::Database("Failed to create customer".to_string()))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Customer>> {
        let rid = parse_record_id(CUSTOMER_TABLE, id)?;
        let customer: Option<Customer> = self.base.db().select(rid).await?;
        Ok(customer)
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        let customers: Vec<Customer> = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(customers.into_iter().next())
    }

    pub async fn update(&self, id: &str, data: CustomerUpdate) -> RepoResult<Customer> {
        let rid = parse_record_id(CUSTOMER_TABLE, id)?;

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.email.is_some() {
            set_parts.push("email = $email");
        }
        if data.address.is_some() {
            set_parts.push("address = $address");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Customer {id} not found")));
        }
        set_parts.push("updated_at = $now");

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self
            .base
            .db()
            .query(&query_str)
            .bind(("thing", rid))
            .bind(("now", now_millis()));
        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.email {
            query = query.bind(("email", v));
        }
        if let Some(v) = data.address {
            query = query.bind(("address", v));
        }

        let customers: Vec<Customer> = query.await?.take(0)?;
        customers
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Customer {id} not found")))
    }

    /// Change a customer's role. Role names are validated at the API layer.
    pub async fn update_role(&self, id: &str, role: &str) -> RepoResult<Customer> {
        let rid = parse_record_id(CUSTOMER_TABLE, id)?;
        let customers: Vec<Customer> = self
            .base
            .db()
            .query("UPDATE $thing SET role = $role, updated_at = $now RETURN AFTER")
            .bind(("thing", rid))
            .bind(("role", role.to_string()))
            .bind(("now", now_millis()))
            .await?
            .take(0)?;
        customers
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Customer {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = parse_record_id(CUSTOMER_TABLE, id)?;
        let deleted: Option<Customer> = self.base.db().delete(rid).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Customer {id} not found")));
        }
        Ok(())
    }
}
