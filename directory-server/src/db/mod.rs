//! Database Module
//!
//! Embedded SurrealDB connection and schema definition.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::utils::AppError;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database under `work_dir` and define the schema.
    pub async fn new(work_dir: &Path) -> Result<Self, AppError> {
        use surrealdb::engine::local::RocksDb;

        let db_path = work_dir.join("database");
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("staffdir")
            .use_db("directory")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;

        tracing::info!("Database ready (embedded SurrealDB, RocksDB engine)");

        Ok(Self { db })
    }
}

/// Define tables and indexes. Idempotent.
///
/// The unique index on `employee_id` is what actually guarantees the
/// uniqueness invariant; the repository's pre-insert check only exists
/// to produce a friendly error without a round trip through the index.
pub async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query("DEFINE TABLE IF NOT EXISTS employee SCHEMALESS")
        .query("DEFINE INDEX IF NOT EXISTS uniq_employee_id ON TABLE employee FIELDS employee_id UNIQUE")
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
        .check()
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn opens_database_and_defines_schema() {
        let dir = tempfile::tempdir().unwrap();
        let service = DbService::new(dir.path()).await.unwrap();

        // Schema definition is idempotent
        define_schema(&service.db).await.unwrap();
    }
}
