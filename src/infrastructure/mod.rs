// ============================================================================
// Infrastructure Layer - SQL persistence
// ============================================================================
//
// - db/        - connection pool, table definitions, RepositoryError
// - product/   - ProductModel + ProductRepository
// - customer/  - CustomerModel + CustomerRepository
// - order/     - OrderModel/OrderItemModel + OrderRepository
//
// ============================================================================

pub mod customer;
pub mod db;
pub mod order;
pub mod product;

pub use customer::CustomerRepository;
pub use db::{Database, RepositoryError};
pub use order::OrderRepository;
pub use product::ProductRepository;
