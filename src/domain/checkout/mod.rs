// ============================================================================
// Checkout Domain - Order aggregate
// ============================================================================
//
// - Order item (line snapshot of a product)
// - Order (aggregate root, owns its items)
// - Errors (OrderError enum)
//
// ============================================================================

pub mod order_item;
pub mod order;
pub mod errors;

// Re-export for convenience
pub use order_item::*;
pub use order::*;
pub use errors::*;
