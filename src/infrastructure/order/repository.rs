use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use crate::domain::checkout::Order;
use crate::domain::RepositoryInterface;
use crate::infrastructure::db::RepositoryError;
use crate::metrics::RepositoryMetrics;

use super::model::{OrderItemModel, OrderModel};

const REPOSITORY: &str = "order";

const SELECT_ITEMS: &str =
    "SELECT id, name, price, quantity, order_id, product_id, total FROM order_items";

// ============================================================================
// Order Repository - persists the order header and its items together
// ============================================================================
//
// Every write touches `orders` and `order_items` inside one transaction:
// either the whole aggregate is stored, or nothing is.
//
// ============================================================================

#[derive(Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
    metrics: Option<Arc<RepositoryMetrics>>,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool, metrics: None }
    }

    pub fn with_metrics(mut self, metrics: Arc<RepositoryMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Load the stored rows of an order, items included
    pub async fn find_model(&self, id: &str) -> Result<OrderModel, RepositoryError> {
        // Header and items come from the same snapshot.
        let mut tx = self.pool.begin().await?;

        let mut model = sqlx::query_as::<_, OrderModel>(
            "SELECT id, customer_id, total FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Order", id))?;

        model.items = sqlx::query_as::<_, OrderItemModel>(&format!(
            "{SELECT_ITEMS} WHERE order_id = ? ORDER BY rowid"
        ))
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(model)
    }

    fn observe<T>(&self, operation: &str, started: Instant, result: &Result<T, RepositoryError>) {
        if let Some(metrics) = &self.metrics {
            metrics.record(REPOSITORY, operation, started.elapsed(), result);
        }
    }

    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        let model = OrderModel::from(order);
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind(&model.id)
            .bind(&model.customer_id)
            .bind(model.total)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::on_insert("Order", &model.id, e))?;

        insert_items(&mut tx, &model.items).await?;
        tx.commit().await?;

        tracing::info!(
            order_id = %model.id,
            customer_id = %model.customer_id,
            item_count = model.items.len(),
            total = model.total,
            "Order created"
        );
        Ok(())
    }

    async fn replace(&self, order: &Order) -> Result<(), RepositoryError> {
        let model = OrderModel::from(order);
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE orders SET customer_id = ?, total = ? WHERE id = ?")
            .bind(&model.customer_id)
            .bind(model.total)
            .bind(&model.id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Order", &model.id));
        }

        let removed = sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(&model.id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        insert_items(&mut tx, &model.items).await?;
        tx.commit().await?;

        tracing::info!(
            order_id = %model.id,
            removed_items = removed,
            item_count = model.items.len(),
            total = model.total,
            "Order updated"
        );
        Ok(())
    }

    async fn select(&self, id: &str) -> Result<Order, RepositoryError> {
        let model = self.find_model(id).await?;

        tracing::debug!(order_id = %id, item_count = model.items.len(), "Order loaded");
        Ok(Order::try_from(model)?)
    }

    async fn select_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let mut models = sqlx::query_as::<_, OrderModel>(
            "SELECT id, customer_id, total FROM orders ORDER BY rowid",
        )
        .fetch_all(&mut *tx)
        .await?;

        let items = sqlx::query_as::<_, OrderItemModel>(&format!("{SELECT_ITEMS} ORDER BY rowid"))
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        let mut by_order: HashMap<String, Vec<OrderItemModel>> = HashMap::new();
        for item in items {
            by_order.entry(item.order_id.clone()).or_default().push(item);
        }

        for model in &mut models {
            model.items = by_order.remove(&model.id).unwrap_or_default();
        }

        tracing::debug!(count = models.len(), "Orders loaded");

        models
            .into_iter()
            .map(|model| Order::try_from(model).map_err(RepositoryError::from))
            .collect()
    }
}

async fn insert_items(
    conn: &mut SqliteConnection,
    items: &[OrderItemModel],
) -> Result<(), RepositoryError> {
    for item in items {
        sqlx::query(
            "INSERT INTO order_items (id, order_id, product_id, name, price, quantity, total)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&item.id)
        .bind(&item.order_id)
        .bind(&item.product_id)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.quantity)
        .bind(item.total)
        .execute(&mut *conn)
        .await
        .map_err(|e| RepositoryError::on_insert("OrderItem", &item.id, e))?;
    }
    Ok(())
}

#[async_trait]
impl RepositoryInterface<Order> for OrderRepository {
    type Update = Order;
    type Error = RepositoryError;

    async fn create(&self, order: &Order) -> Result<(), RepositoryError> {
        let started = Instant::now();
        let result = self.insert(order).await;
        self.observe("create", started, &result);
        result
    }

    /// Replaces the whole item set of an existing order and its total.
    async fn update(&self, order: Order) -> Result<(), RepositoryError> {
        let started = Instant::now();
        let result = self.replace(&order).await;
        self.observe("update", started, &result);
        result
    }

    async fn find(&self, id: &str) -> Result<Order, RepositoryError> {
        let started = Instant::now();
        let result = self.select(id).await;
        self.observe("find", started, &result);
        result
    }

    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let started = Instant::now();
        let result = self.select_all().await;
        self.observe("find_all", started, &result);
        result
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
