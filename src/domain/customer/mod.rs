// ============================================================================
// Customer Domain
// ============================================================================
//
// - Value objects (Address)
// - Entity (Customer)
// - Errors (CustomerError enum)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod entity;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use entity::*;
