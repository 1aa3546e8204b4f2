// ============================================================================
// Product Domain
// ============================================================================
//
// - Entity (Product)
// - Update DTO (ProductUpdate)
// - Errors (ProductError enum)
//
// ============================================================================

pub mod entity;
pub mod errors;

// Re-export for convenience
pub use entity::*;
pub use errors::*;
