use crate::domain::checkout::OrderError;
use crate::domain::customer::CustomerError;
use crate::domain::product::ProductError;

// ============================================================================
// Repository Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    // A stored row that no longer forms a valid entity
    #[error("Invalid product record: {0}")]
    Product(#[from] ProductError),

    #[error("Invalid customer record: {0}")]
    Customer(#[from] CustomerError),

    #[error("Invalid order record: {0}")]
    Order(#[from] OrderError),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Maps a failed INSERT, turning key collisions into `AlreadyExists`.
    pub fn on_insert(entity: &'static str, id: impl Into<String>, err: sqlx::Error) -> Self {
        if is_unique_violation(&err) {
            Self::AlreadyExists {
                entity,
                id: id.into(),
            }
        } else {
            Self::Database(err)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation()
                || db_err.message().contains("UNIQUE constraint failed")
        }
        _ => false,
    }
}
