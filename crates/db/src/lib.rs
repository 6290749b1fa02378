//! Persistence for the drawboard engine.
//!
//! [`store::Store`] is the backend seam ([`store::PgStore`] over the
//! repository layer, [`store::MemoryStore`] in process). [`adapter`] holds
//! the shape and comment rules layered on top of any backend.

pub mod adapter;
pub mod models;
pub mod ordering;
pub mod repositories;
pub mod seed;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
