// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with its entities, value objects
// and errors. Nothing in here knows about SQL.
//
// ============================================================================

pub mod checkout;
pub mod customer;
pub mod product;
pub mod repository;

pub use repository::RepositoryInterface;
