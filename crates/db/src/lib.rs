//! Storage gateway for the customers service.
//!
//! Owns the PostgreSQL pool lifecycle ([`connect`], [`disconnect`],
//! [`health_check`]) and the repository layer that issues one
//! parameterized statement per call.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Called once at service start; the returned pool is shared by every request.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    tracing::info!(max_connections, "Database connected");
    Ok(pool)
}

/// Close every connection in the pool. Waits for checked-out connections to
/// be returned first.
pub async fn disconnect(pool: &DbPool) {
    pool.close().await;
    tracing::info!("Database disconnected");
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
