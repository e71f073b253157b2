use crate::types::DbId;

/// Domain-level error shared by all crates.
///
/// The HTTP layer maps each variant onto a status code and a stable
/// machine-readable error code; see `folio-api`'s `AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A row looked up by id does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A row looked up by a natural key (e.g. a project title) does not exist.
    #[error("{entity} '{key}' not found")]
    NotFoundByKey { entity: &'static str, key: String },

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_includes_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Project",
            id: 7,
        };
        assert_eq!(err.to_string(), "Project with id 7 not found");
    }

    #[test]
    fn not_found_by_key_display_quotes_the_key() {
        let err = CoreError::NotFoundByKey {
            entity: "Project",
            key: "atlas".to_string(),
        };
        assert_eq!(err.to_string(), "Project 'atlas' not found");
    }
}
