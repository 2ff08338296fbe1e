//! Database Module
//!
//! Owns the embedded SurrealDB instance and the schema definitions.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "cakestore";
const DATABASE: &str = "store";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the RocksDB-backed database at `db_dir`
    pub async fn new(db_dir: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        let service = Self { db };
        service.init().await?;
        tracing::info!("Database opened at {}", db_dir.display());
        Ok(service)
    }

    /// Open an in-memory database (tests)
    pub async fn memory() -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        let service = Self { db };
        service.init().await?;
        Ok(service)
    }

    async fn init(&self) -> Result<(), AppError> {
        self.db
            .use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;
        self.define_schema().await
    }

    /// Declare the indexes the invariants rely on.
    ///
    /// Tables themselves are schemaless; these indexes enforce the
    /// one-row-per-(customer, cake) cart shape, unique customer emails,
    /// the 1:1 payment↔order link, and unique table numbers.
    async fn define_schema(&self) -> Result<(), AppError> {
        let statements = [
            "DEFINE INDEX IF NOT EXISTS cart_customer_cake ON TABLE cart COLUMNS customer, cake UNIQUE",
            "DEFINE INDEX IF NOT EXISTS customer_email ON TABLE customer COLUMNS email UNIQUE",
            "DEFINE INDEX IF NOT EXISTS payment_order ON TABLE payment COLUMNS order_id UNIQUE",
            "DEFINE INDEX IF NOT EXISTS dining_table_number ON TABLE dining_table COLUMNS number UNIQUE",
        ];
        for stmt in statements {
            self.db
                .query(stmt)
                .await
                .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        }
        tracing::info!("Database schema definitions applied");
        Ok(())
    }
}
