#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! ÇizgiHub Shared Library
//!
//! Database plumbing used by the API server: connection pool construction
//! and the embedded schema migrations.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

/// Default number of pooled connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a database connection pool
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(600))
        .connect(database_url)
        .await?;

    tracing::info!(max_connections, "Database pool created");
    Ok(pool)
}

/// Apply pending migrations from `crates/shared/migrations`
///
/// The users table carries unique indexes on `LOWER(username)` and
/// `LOWER(email)`; they are the source of truth for account uniqueness.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
