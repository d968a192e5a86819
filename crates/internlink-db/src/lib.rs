//! # InternLink DB
//!
//! Persistence for the InternLink API.
//!
//! - [`Store`]: the async trait every service talks to
//! - [`PgStore`]: PostgreSQL backend (sqlx)
//! - [`MemoryStore`]: in-process backend for tests and local development
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use internlink_db::{PgStore, Store, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&database_url).await?;
//! run_migrations(&pool).await?;
//! let store: Arc<dyn Store> = Arc::new(PgStore::new(pool));
//! ```

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::Store;

pub use sqlx::PgPool;

/// Connects a PostgreSQL pool to `database_url`.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, StoreError> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Applies the embedded migrations under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
