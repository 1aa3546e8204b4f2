// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Order id is required")]
    EmptyId,

    #[error("Customer id is required")]
    EmptyCustomerId,

    #[error("Order items cannot be empty")]
    EmptyItems,
}
