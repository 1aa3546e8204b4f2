use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::product::{Product, ProductUpdate};
use crate::domain::RepositoryInterface;
use crate::infrastructure::db::RepositoryError;
use crate::metrics::RepositoryMetrics;

use super::model::ProductModel;

const REPOSITORY: &str = "product";

// ============================================================================
// Product Repository
// ============================================================================

#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
    metrics: Option<Arc<RepositoryMetrics>>,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool, metrics: None }
    }

    pub fn with_metrics(mut self, metrics: Arc<RepositoryMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn observe<T>(&self, operation: &str, started: Instant, result: &Result<T, RepositoryError>) {
        if let Some(metrics) = &self.metrics {
            metrics.record(REPOSITORY, operation, started.elapsed(), result);
        }
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        let model = ProductModel::from(product);

        sqlx::query("INSERT INTO products (id, name, price) VALUES (?, ?, ?)")
            .bind(&model.id)
            .bind(&model.name)
            .bind(model.price)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::on_insert("Product", &model.id, e))?;

        tracing::info!(product_id = %model.id, price = model.price, "Product created");
        Ok(())
    }

    async fn apply_update(&self, update: ProductUpdate) -> Result<(), RepositoryError> {
        update.validate()?;

        let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(&update.name)
            .bind(update.price)
            .bind(&update.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(product_id = %update.id, "Product update matched no rows");
        } else {
            tracing::info!(product_id = %update.id, price = update.price, "Product updated");
        }

        Ok(())
    }

    async fn select(&self, id: &str) -> Result<Product, RepositoryError> {
        let model = sqlx::query_as::<_, ProductModel>(
            "SELECT id, name, price FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Product", id))?;

        tracing::debug!(product_id = %id, "Product loaded");
        Ok(Product::try_from(model)?)
    }

    async fn select_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let models = sqlx::query_as::<_, ProductModel>("SELECT id, name, price FROM products")
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = models.len(), "Products loaded");

        models
            .into_iter()
            .map(|model| Product::try_from(model).map_err(RepositoryError::from))
            .collect()
    }
}

#[async_trait]
impl RepositoryInterface<Product> for ProductRepository {
    type Update = ProductUpdate;
    type Error = RepositoryError;

    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        let started = Instant::now();
        let result = self.insert(product).await;
        self.observe("create", started, &result);
        result
    }

    /// Unknown ids are a silent no-op.
    async fn update(&self, update: ProductUpdate) -> Result<(), RepositoryError> {
        let started = Instant::now();
        let result = self.apply_update(update).await;
        self.observe("update", started, &result);
        result
    }

    async fn find(&self, id: &str) -> Result<Product, RepositoryError> {
        let started = Instant::now();
        let result = self.select(id).await;
        self.observe("find", started, &result);
        result
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let started = Instant::now();
        let result = self.select_all().await;
        self.observe("find_all", started, &result);
        result
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
