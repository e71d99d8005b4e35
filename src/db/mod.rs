//! Database Module
//!
//! Embedded SurrealDB (RocksDB backend) connection and schema setup.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "roster";
const DATABASE: &str = "roster";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database and apply schema definitions.
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        Self::define_schema(&db).await?;

        tracing::info!(path = %db_path.display(), "Database connection established");
        Ok(Self { db })
    }

    /// Schema definitions are idempotent (OVERWRITE), re-applied on every boot.
    async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        db.query(
            r#"
            DEFINE INDEX OVERWRITE employee_email ON employee FIELDS email UNIQUE;
            DEFINE INDEX OVERWRITE shift_employee_date ON shift FIELDS employee, shift_date;
            DEFINE INDEX OVERWRITE offer_status ON shift_offer FIELDS status;
            DEFINE INDEX OVERWRITE swap_status ON swap_request FIELDS status;
            DEFINE INDEX OVERWRITE leave_employee ON leave_request FIELDS employee;
            "#,
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
        .check()
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        Ok(())
    }
}
