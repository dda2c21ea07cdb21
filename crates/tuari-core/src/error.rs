//! # Error Types
//!
//! Domain-specific error types for tuari-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tuari-core errors (this file)                                         │
//! │  └── ValidationError  - A field violates its constraint                │
//! │                                                                         │
//! │  tuari-db errors (separate crate)                                      │
//! │  └── DbError          - Conflict, NotFound, storage failures           │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → HTTP status (outside workspace)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// Raised before a write is attempted, or mapped back from a storage
/// `CHECK` constraint when a bad value slips past the early checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Floating point value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Storage rejected the row through a CHECK constraint.
    #[error("constraint violated: {constraint}")]
    Constraint { constraint: String },
}

impl ValidationError {
    /// Returns the field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBeNonNegative { field }
            | ValidationError::NotFinite { field } => Some(field),
            ValidationError::Constraint { .. } => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 255,
        };
        assert_eq!(err.to_string(), "name must be at most 255 characters");

        let err = ValidationError::OutOfRange {
            field: "per_page".to_string(),
            min: 1,
            max: 100,
        };
        assert_eq!(err.to_string(), "per_page must be between 1 and 100");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        };
        assert_eq!(err.field(), Some("quantity"));

        let err = ValidationError::Constraint {
            constraint: "items.price".to_string(),
        };
        assert_eq!(err.field(), None);
    }
}
