use std::time::Duration;

use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::config::settings::DatabaseSettings;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Opens the database once up front so an unusable path fails immediately
/// instead of after the pool's checkout timeout.
pub fn create_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    check_database_opens(&settings.path)?;

    let manager = build_manager(&settings.path);
    build_pool(
        manager,
        settings.pool_size,
        Duration::from_millis(settings.connection_timeout_ms),
    )
}

fn check_database_opens(path: &str) -> Result<()> {
    Connection::open(path)
        .with_context(|| format!("Failed to open database at {}", path))
        .map(|_| ())
}

/// Single-connection pool over a private in-memory database.
///
/// Every connection of a `memory()` manager opens its own empty database, so
/// the pool is capped at one connection to keep the data visible across
/// checkouts.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = enable_foreign_keys(SqliteConnectionManager::memory());
    build_pool(manager, 1, Duration::from_secs(1))
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    enable_foreign_keys(SqliteConnectionManager::file(path))
}

fn enable_foreign_keys(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn build_pool(
    manager: SqliteConnectionManager,
    max_size: u32,
    connection_timeout: Duration,
) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(max_size)
        .connection_timeout(connection_timeout)
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
