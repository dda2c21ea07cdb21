//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (tuari-core)        SQLite Error (sqlx::Error)        │
//! │       │                                   │                             │
//! │       └──────────────┬────────────────────┘                             │
//! │                      ▼                                                  │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  HTTP layer maps kinds to status codes (outside workspace)             │
//! │                                                                         │
//! │  Validation → 422    Conflict → 409    NotFound → 404                  │
//! │  everything else (storage) → 500                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use tuari_core::ValidationError;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A field violates its constraint.
    ///
    /// ## When This Occurs
    /// - Early field checks reject the input
    /// - A storage CHECK constraint rejects the row
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Adding an item whose SKU already exists
    /// - Updating an item's SKU to one held by another item
    #[error("Duplicate {field}: '{value}' already exists")]
    Conflict { field: String, value: String },

    /// Entity not found for a mutation.
    ///
    /// Plain reads return `Ok(None)` instead.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created or opened
    /// - File permissions issue
    /// - Pool already closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema setup failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Begin, commit or rollback failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error.
    pub fn conflict(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::Conflict {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Wraps a failure of begin/commit/rollback.
    pub(crate) fn transaction(err: sqlx::Error) -> Self {
        match DbError::from(err) {
            DbError::QueryFailed(msg) | DbError::Internal(msg) => DbError::TransactionFailed(msg),
            other => other,
        }
    }

    /// True for underlying I/O, pool and transaction failures.
    ///
    /// These are the errors a caller can't fix by changing its input.
    pub fn is_storage(&self) -> bool {
        !matches!(
            self,
            DbError::Validation(_) | DbError::Conflict { .. } | DbError::NotFound { .. }
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, DbError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database "UNIQUE constraint failed: t.c" → DbError::Conflict
/// sqlx::Error::Database "CHECK constraint failed: ..."  → DbError::Validation
/// sqlx::Error::Database (other)                         → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut                             → DbError::PoolExhausted
/// sqlx::Error::PoolClosed / Io                          → DbError::ConnectionFailed
/// Other                                                 → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports constraints as:
                // "UNIQUE constraint failed: <table>.<column>"
                // "CHECK constraint failed: <expr or name>"
                if let Some(field) = msg.split("UNIQUE constraint failed: ").nth(1) {
                    DbError::Conflict {
                        field: field.to_string(),
                        value: "unknown".to_string(),
                    }
                } else if let Some(constraint) = msg.split("CHECK constraint failed: ").nth(1) {
                    DbError::Validation(ValidationError::Constraint {
                        constraint: constraint.to_string(),
                    })
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::conflict("sku", "WM001");
        assert_eq!(err.to_string(), "Duplicate sku: 'WM001' already exists");

        let err = DbError::not_found("Item", 42);
        assert_eq!(err.to_string(), "Item not found: 42");
    }

    #[test]
    fn test_kinds() {
        assert!(DbError::conflict("sku", "X").is_conflict());
        assert!(!DbError::conflict("sku", "X").is_storage());
        assert!(DbError::not_found("Item", 1).is_not_found());
        assert!(!DbError::not_found("Item", 1).is_storage());
        assert!(DbError::PoolExhausted.is_storage());
        assert!(DbError::QueryFailed("disk I/O error".to_string()).is_storage());

        let err: DbError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(!err.is_storage());
    }

    #[test]
    fn test_pool_errors_map() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
        assert!(matches!(
            DbError::transaction(sqlx::Error::WorkerCrashed),
            DbError::TransactionFailed(_)
        ));
    }
}
