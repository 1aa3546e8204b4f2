use async_trait::async_trait;

// ============================================================================
// Repository Pattern - Domain side of persistence
// ============================================================================
//
// Each aggregate is stored through a repository implementing this trait.
// The domain only depends on the trait; SQL lives in src/infrastructure/.
//
// ============================================================================

/// Generic repository over an entity `T`.
///
/// Type Parameters:
/// - `Update`: what `update` accepts (the entity itself, or a narrower DTO)
/// - `Error`: failure type of the backing store
#[async_trait]
pub trait RepositoryInterface<T>: Send + Sync {
    type Update: Send;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist a new entity
    async fn create(&self, entity: &T) -> Result<(), Self::Error>;

    /// Overwrite the stored state of an existing entity
    async fn update(&self, update: Self::Update) -> Result<(), Self::Error>;

    /// Load one entity by id
    async fn find(&self, id: &str) -> Result<T, Self::Error>;

    /// Load every stored entity
    async fn find_all(&self) -> Result<Vec<T>, Self::Error>;
}
