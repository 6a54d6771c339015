//! PostgreSQL storage for construction works and their satellite records.
//!
//! Repositories hand back rows in storage form: structured fields are
//! [`JsonField::Text`](buildtrack_core::json_field::JsonField::Text). Callers
//! run [`normalize`](buildtrack_core::normalize::normalize) before exposing
//! them and [`denormalize`](buildtrack_core::normalize::denormalize) on the
//! DTOs they write.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(max_connections, "Opening database pool");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Fresh primary key for an insert.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
