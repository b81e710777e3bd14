//! Repository error taxonomy
//!
//! Every repository operation translates store-level failures into one of
//! these four kinds at its boundary, always chaining the original
//! `sea_orm::DbErr` for diagnostics. The HTTP layer maps them to status
//! codes (400 / 404 / 409 / 500).

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Caller-supplied values violate preconditions (e.g. negative offset).
    /// Raised before any store access, never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Requested entity does not exist. Only raised by the fail-hard lookup
    /// path (`get_or_fail`); plain lookups encode absence as `None`.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A uniqueness constraint rejected the write.
    #[error("{entity} already exists")]
    AlreadyExists {
        entity: &'static str,
        #[source]
        source: DbErr,
    },

    /// Catch-all store failure: connectivity, closed unit of work,
    /// deferred constraint at commit, and so on.
    #[error("{operation} failed for {entity}")]
    OperationFailed {
        entity: &'static str,
        operation: &'static str,
        #[source]
        source: DbErr,
    },
}

impl RepositoryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Operation failure on a unit of work that has already been committed
    /// or rolled back.
    pub fn closed(entity: &'static str, operation: &'static str) -> Self {
        Self::OperationFailed {
            entity,
            operation,
            source: DbErr::Custom("unit of work is closed".to_string()),
        }
    }

    /// Classify a store error for a write operation: uniqueness violations
    /// become `AlreadyExists`, everything else `OperationFailed`.
    pub fn from_db(entity: &'static str, operation: &'static str, source: DbErr) -> Self {
        if matches!(source.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            Self::AlreadyExists { entity, source }
        } else {
            Self::OperationFailed {
                entity,
                operation,
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = RepositoryError::not_found("organization", "d0c9d3a0");
        assert_eq!(err.to_string(), "organization with id d0c9d3a0 not found");
    }

    #[test]
    fn closed_unit_of_work_is_operation_failed() {
        let err = RepositoryError::closed("organization", "get");
        assert!(matches!(err, RepositoryError::OperationFailed { .. }));
    }

    #[test]
    fn plain_db_error_maps_to_operation_failed() {
        let err = RepositoryError::from_db(
            "organization",
            "create",
            DbErr::Custom("connection reset".to_string()),
        );
        assert!(matches!(err, RepositoryError::OperationFailed { .. }));
    }
}
