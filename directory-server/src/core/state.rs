use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::services::{MediaStore, RemoteMediaStore};
use crate::utils::AppError;

/// Server state - shared handles for every request
///
/// | Field | Type | Purpose |
/// |-------|------|---------|
/// | config | Config | immutable configuration |
/// | db | Surreal<Db> | embedded document store |
/// | media | Arc<dyn MediaStore> | photo hosting collaborator |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Media storage collaborator
    pub media: Arc<dyn MediaStore>,
}

impl ServerState {
    /// Manual construction; [`ServerState::initialize`] is the usual path.
    pub fn new(config: Config, db: Surreal<Db>, media: Arc<dyn MediaStore>) -> Self {
        Self { config, db, media }
    }

    /// Initialize server state:
    ///
    /// 1. Ensure the working directory exists
    /// 2. Open the database at `{work_dir}/database`
    /// 3. Build the media service client
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let work_dir = PathBuf::from(&config.work_dir);
        std::fs::create_dir_all(&work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db_service = DbService::new(&work_dir).await?;

        let media = Arc::new(
            RemoteMediaStore::new(
                config.media_upload_url.clone(),
                Duration::from_millis(config.request_timeout_ms),
            )
            .map_err(|e| AppError::internal(format!("Failed to build media client: {e}")))?,
        );

        Ok(Self::new(config.clone(), db_service.db, media))
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
