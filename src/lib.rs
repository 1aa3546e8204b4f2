// ============================================================================
// order_store - Customer / Product / Order domain with SQL repositories
// ============================================================================
//
// - domain/          - entities, value objects, business rule errors
// - infrastructure/  - row models and repositories backed by sqlx
// - metrics/         - Prometheus counters for repository calls
// - config           - database settings from the environment
//
// ============================================================================

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod metrics;

pub use config::DatabaseConfig;
pub use domain::RepositoryInterface;
pub use infrastructure::{
    CustomerRepository, Database, OrderRepository, ProductRepository, RepositoryError,
};
pub use metrics::RepositoryMetrics;
