use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sqlx::postgres::PgPool;

use crate::config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// SeaORM database connection (primary for queries)
    pub db: DatabaseConnection,
    /// SQLx pool for migrations only
    pub pg_pool: PgPool,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState: run migrations, then open the pooled
    /// connection handlers use for queries.
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        // Connect to PostgreSQL with SQLx (for migrations)
        let pg_pool = PgPool::connect(&config.database_url)
            .await
            .map_err(|e| AppStateError::Postgres(e.to_string()))?;

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pg_pool)
            .await
            .map_err(|e| AppStateError::Migration(e.to_string()))?;

        // Connect to PostgreSQL with SeaORM
        let mut opt = ConnectOptions::new(&config.database_url);
        opt.max_connections(100)
            .min_connections(5)
            .sqlx_logging(true);

        let db = Database::connect(opt)
            .await
            .map_err(|e| AppStateError::Postgres(e.to_string()))?;

        Ok(Self {
            db,
            pg_pool,
            config,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("PostgreSQL connection error: {0}")]
    Postgres(String),

    #[error("Migration error: {0}")]
    Migration(String),
}
