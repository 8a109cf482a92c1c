use crate::types::DbId;

/// Domain error taxonomy.
///
/// Lookup misses are represented as `Ok(None)` at the repository layer;
/// `NotFound` is raised at the handler boundary where a missing record must
/// become a 404 (clients respond by redirecting to a safe listing page).
/// `Validation` failures are raised before any store or upload call.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
