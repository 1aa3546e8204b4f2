// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer id is required")]
    EmptyId,

    #[error("Customer name is required")]
    EmptyName,

    #[error("Address is mandatory to activate a customer")]
    AddressRequired,

    #[error("Street is required")]
    EmptyStreet,

    #[error("Zip code is required")]
    EmptyZip,

    #[error("City is required")]
    EmptyCity,
}
