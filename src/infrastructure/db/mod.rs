use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;

mod error;

pub use error::RepositoryError;

// ============================================================================
// Database - connection pool and table definitions
// ============================================================================
//
// One `Database` is built at startup and its pool is handed to each
// repository. `sync` creates any missing table; it never alters existing ones.
//
// ============================================================================

const SCHEMA: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS products (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        price REAL NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS customers (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        street TEXT,
        number INTEGER,
        zipcode TEXT,
        city TEXT,
        active INTEGER NOT NULL DEFAULT 0,
        reward_points REAL NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id TEXT PRIMARY KEY NOT NULL,
        customer_id TEXT NOT NULL REFERENCES customers (id),
        total REAL NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS order_items (
        id TEXT PRIMARY KEY NOT NULL,
        order_id TEXT NOT NULL REFERENCES orders (id),
        product_id TEXT NOT NULL REFERENCES products (id),
        name TEXT NOT NULL,
        price REAL NOT NULL,
        quantity INTEGER NOT NULL,
        total REAL NOT NULL
    )",
];

#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
        if config.is_in_memory() {
            // Closing the only connection would drop the whole database.
            pool_options = pool_options
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = pool_options.connect_with(options).await?;

        tracing::debug!(
            url = %config.url,
            max_connections = config.max_connections,
            "Connected to database"
        );

        Ok(Self { pool })
    }

    /// Fresh in-memory database with all tables created
    pub async fn in_memory() -> Result<Self, RepositoryError> {
        let database = Self::connect(&DatabaseConfig::in_memory()).await?;
        database.sync().await?;
        Ok(database)
    }

    pub async fn sync(&self) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        for statement in SCHEMA {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        tx.commit().await?;

        tracing::info!(tables = SCHEMA.len(), "Database schema synchronized");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sync_creates_tables() {
        let database = Database::in_memory().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(database.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|(name,)| name.as_str()).collect();
        assert_eq!(names, vec!["customers", "order_items", "orders", "products"]);
    }

    #[tokio::test]
    async fn test_sync_is_idempotent() {
        let database = Database::in_memory().await.unwrap();
        database.sync().await.unwrap();
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let database = Database::in_memory().await.unwrap();

        let result = sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind("o1")
            .bind("missing")
            .bind(0.0)
            .execute(database.pool())
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_in_memory_databases_are_isolated() {
        let first = Database::in_memory().await.unwrap();
        let second = Database::in_memory().await.unwrap();

        sqlx::query("INSERT INTO products (id, name, price) VALUES ('p1', 'product 1', 10)")
            .execute(first.pool())
            .await
            .unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(second.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
