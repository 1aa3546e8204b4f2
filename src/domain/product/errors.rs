// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("Product id is required")]
    EmptyId,

    #[error("Product name is required")]
    EmptyName,

    #[error("Product price must be greater than or equal to zero, got {0}")]
    NegativePrice(f64),
}
