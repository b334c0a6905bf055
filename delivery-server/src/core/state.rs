use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::deliveries::{DeliveryLogService, SqliteDeliveryStore};
use crate::utils::AppError;

/// Shared handler state
///
/// Holds the connection pool and the JWT service behind cheap clones.
/// The pool is the only shared mutable resource; handlers own nothing
/// else across requests.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Open the configured database, run migrations and wire up services.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::with_pool(config.clone(), db.pool))
    }

    /// State over an existing pool (tests use an in-memory database).
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// The delivery log service over the SQLite-backed store.
    pub fn delivery_logs(&self) -> DeliveryLogService<SqliteDeliveryStore> {
        DeliveryLogService::new(SqliteDeliveryStore::new(self.pool.clone()))
    }
}
