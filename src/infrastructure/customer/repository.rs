use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::customer::Customer;
use crate::domain::RepositoryInterface;
use crate::infrastructure::db::RepositoryError;
use crate::metrics::RepositoryMetrics;

use super::model::CustomerModel;

const REPOSITORY: &str = "customer";

const SELECT_CUSTOMER: &str =
    "SELECT id, name, street, number, zipcode, city, active, reward_points FROM customers";

// ============================================================================
// Customer Repository
// ============================================================================

#[derive(Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
    metrics: Option<Arc<RepositoryMetrics>>,
}

impl CustomerRepository {
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

    async fn insert(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let model = CustomerModel::from(customer);

        sqlx::query(
            "INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&model.id)
        .bind(&model.name)
        .bind(&model.street)
        .bind(model.number)
        .bind(&model.zipcode)
        .bind(&model.city)
        .bind(model.active)
        .bind(model.reward_points)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::on_insert("Customer", &model.id, e))?;

        tracing::info!(customer_id = %model.id, "Customer created");
        Ok(())
    }

    async fn apply_update(&self, customer: Customer) -> Result<(), RepositoryError> {
        let model = CustomerModel::from(&customer);

        let result = sqlx::query(
            "UPDATE customers
             SET name = ?, street = ?, number = ?, zipcode = ?, city = ?, active = ?, reward_points = ?
             WHERE id = ?",
        )
        .bind(&model.name)
        .bind(&model.street)
        .bind(model.number)
        .bind(&model.zipcode)
        .bind(&model.city)
        .bind(model.active)
        .bind(model.reward_points)
        .bind(&model.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(customer_id = %model.id, "Customer update matched no rows");
        } else {
            tracing::info!(customer_id = %model.id, active = model.active, "Customer updated");
        }

        Ok(())
    }

    async fn select(&self, id: &str) -> Result<Customer, RepositoryError> {
        let model = sqlx::query_as::<_, CustomerModel>(&format!("{SELECT_CUSTOMER} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Customer", id))?;

        tracing::debug!(customer_id = %id, "Customer loaded");
        Ok(Customer::try_from(model)?)
    }

    async fn select_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let models = sqlx::query_as::<_, CustomerModel>(SELECT_CUSTOMER)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = models.len(), "Customers loaded");

        models
            .into_iter()
            .map(|model| Customer::try_from(model).map_err(RepositoryError::from))
            .collect()
    }
}

#[async_trait]
impl RepositoryInterface<Customer> for CustomerRepository {
    type Update = Customer;
    type Error = RepositoryError;

    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let started = Instant::now();
        let result = self.insert(customer).await;
        self.observe("create", started, &result);
        result
    }

    /// Unknown ids are a silent no-op.
    async fn update(&self, customer: Customer) -> Result<(), RepositoryError> {
        let started = Instant::now();
        let result = self.apply_update(customer).await;
        self.observe("update", started, &result);
        result
    }

    async fn find(&self, id: &str) -> Result<Customer, RepositoryError> {
        let started = Instant::now();
        let result = self.select(id).await;
        self.observe("find", started, &result);
        result
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let started = Instant::now();
        let result = self.select_all().await;
        self.observe("find_all", started, &result);
        result
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
