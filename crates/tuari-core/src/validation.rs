//! # Validation Module
//!
//! Field constraint checks for inventory items.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP layer (outside workspace)                               │
//! │  └── Type validation (deserialization)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Length, sign and range rules per field                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── UNIQUE index on sku                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lengths are counted in characters, matching SQLite's `length()` on TEXT.
//!
//! ## Usage
//! ```rust
//! use tuari_core::validation::{validate_sku, validate_quantity};
//!
//! validate_sku("MBP16-001").unwrap();
//! validate_quantity(0).unwrap();
//! assert!(validate_quantity(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::patch::{FieldUpdate, ItemPatch};
use crate::types::NewItem;
use crate::{
    MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN, MAX_LOCATION_LEN, MAX_NAME_LEN, MAX_PER_PAGE,
    MAX_SKU_LEN,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    optional_text(field, value, max)
}

fn optional_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates an item name: non-empty, at most 255 characters.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    required_text("name", name, MAX_NAME_LEN)
}

/// Validates a category: non-empty, at most 100 characters.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    required_text("category", category, MAX_CATEGORY_LEN)
}

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty (whitespace counts as content)
/// - At most 100 characters
///
/// ## Example
/// ```rust
/// use tuari_core::validation::validate_sku;
///
/// assert!(validate_sku("IP15P-001").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku(&"A".repeat(101)).is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    required_text("sku", sku, MAX_SKU_LEN)
}

/// Validates an optional description: at most 1000 characters.
pub fn validate_description(description: Option<&str>) -> ValidationResult<()> {
    match description {
        Some(text) => optional_text("description", text, MAX_DESCRIPTION_LEN),
        None => Ok(()),
    }
}

/// Validates an optional location: at most 100 characters.
pub fn validate_location(location: Option<&str>) -> ValidationResult<()> {
    match location {
        Some(text) => optional_text("location", text, MAX_LOCATION_LEN),
        None => Ok(()),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity. Zero is allowed.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (free items are fine)
///
/// ## Example
/// ```rust
/// use tuari_core::validation::validate_price;
///
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(49.99).is_ok());
/// assert!(validate_price(-0.01).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a low-stock threshold.
pub fn validate_threshold(threshold: i64) -> ValidationResult<()> {
    if threshold < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "threshold".to_string(),
        });
    }

    Ok(())
}

/// Validates page coordinates: `page >= 1` and `1 <= per_page <= 100`.
pub fn validate_page(page: u32, per_page: u32) -> ValidationResult<()> {
    if page == 0 {
        return Err(ValidationError::OutOfRange {
            field: "page".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        });
    }

    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(ValidationError::OutOfRange {
            field: "per_page".to_string(),
            min: 1,
            max: i64::from(MAX_PER_PAGE),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of an item about to be created.
pub fn validate_new_item(item: &NewItem) -> ValidationResult<()> {
    validate_name(&item.name)?;
    validate_category(&item.category)?;
    validate_description(item.description.as_deref())?;
    validate_quantity(item.quantity)?;
    validate_price(item.price)?;
    validate_sku(&item.sku)?;
    validate_location(item.location.as_deref())?;
    Ok(())
}

/// Validates the supplied fields of a patch; unchanged fields are skipped.
pub fn validate_patch(patch: &ItemPatch) -> ValidationResult<()> {
    if let FieldUpdate::Set(name) = &patch.name {
        validate_name(name)?;
    }
    if let FieldUpdate::Set(category) = &patch.category {
        validate_category(category)?;
    }
    if let FieldUpdate::Set(description) = &patch.description {
        validate_description(description.as_deref())?;
    }
    if let FieldUpdate::Set(quantity) = patch.quantity {
        validate_quantity(quantity)?;
    }
    if let FieldUpdate::Set(price) = patch.price {
        validate_price(price)?;
    }
    if let FieldUpdate::Set(sku) = &patch.sku {
        validate_sku(sku)?;
    }
    if let FieldUpdate::Set(location) = &patch.location {
        validate_location(location.as_deref())?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("MBP16-001").is_ok());
        assert!(validate_sku("sku with spaces").is_ok());
        assert!(validate_sku(&"S".repeat(100)).is_ok());

        assert!(validate_sku("   ").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku(&"S".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_name_counts_characters() {
        // 255 multi-byte characters are still within the limit.
        assert!(validate_name(&"é".repeat(255)).is_ok());
        assert!(validate_name(&"é".repeat(256)).is_err());
        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_validate_optional_text() {
        assert!(validate_description(None).is_ok());
        assert!(validate_description(Some("")).is_ok());
        assert!(validate_description(Some(&"d".repeat(1001))).is_err());
        assert!(validate_location(Some(&"l".repeat(100))).is_ok());
        assert!(validate_location(Some(&"l".repeat(101))).is_err());
    }

    #[test]
    fn test_validate_numbers() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_threshold(0).is_ok());
        assert!(validate_threshold(-5).is_err());
    }

    #[test]
    fn test_validate_new_item() {
        let item = NewItem::new("Wireless Mouse", "Accessories", "WM001").price(99.99);
        assert!(validate_new_item(&item).is_ok());

        let err = validate_new_item(&item.clone().quantity(-3)).unwrap_err();
        assert_eq!(err.field(), Some("quantity"));

        let err = validate_new_item(&NewItem::new("Mouse", "", "WM002")).unwrap_err();
        assert_eq!(err.field(), Some("category"));
    }

    #[test]
    fn test_validate_patch_skips_unchanged() {
        assert!(validate_patch(&ItemPatch::new()).is_ok());
        assert!(validate_patch(&ItemPatch::new().quantity(0).clear_description()).is_ok());

        assert!(validate_patch(&ItemPatch::new().name(" ")).is_ok());

        let err = validate_patch(&ItemPatch::new().name("")).unwrap_err();
        assert_eq!(err.field(), Some("name"));

        let err = validate_patch(&ItemPatch::new().price(-1.0)).unwrap_err();
        assert_eq!(err.field(), Some("price"));
    }
}
