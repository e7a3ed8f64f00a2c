//! Store access for races: pool setup, schema bootstrap, models, and the
//! race repository.

use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;

pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use error::RepoError;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// In-memory URLs (`sqlite::memory:`) get exactly one connection that never
/// expires, since every new SQLite connection would otherwise open a fresh,
/// empty database.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect(database_url)
            .await
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
    }
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://races?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://racing.db?mode=rwc"));
    }
}
