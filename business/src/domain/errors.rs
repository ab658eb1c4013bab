/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.serialization")]
    Serialization,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Errors raised by remote collaborators (stock and catalog services).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service.unavailable")]
    Unavailable,
    #[error("service.invalid_response")]
    InvalidResponse,
    #[error("service.not_found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_i18n_codes() {
        assert_eq!(RepositoryError::Persistence.to_string(), "repository.persistence");
        assert_eq!(RepositoryError::Serialization.to_string(), "repository.serialization");
        assert_eq!(RepositoryError::DatabaseError.to_string(), "repository.database_error");
        assert_eq!(ServiceError::NotFound.to_string(), "service.not_found");
    }
}
