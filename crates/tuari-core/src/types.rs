//! # Domain Types
//!
//! Core domain types used throughout Tuari Inventory.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    NewItem      │   │      Item       │   │ CategorySummary │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  id (i64)       │   │  category       │       │
//! │  │  category, sku  │add│  ...fields      │   │  item_count     │       │
//! │  │  quantity,price │   │  created_at     │   │  total_value    │       │
//! │  └─────────────────┘   │  updated_at     │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every item has:
//! - `id`: integer assigned by storage, immutable and never reused
//! - `sku`: human-readable business key, unique but mutable through updates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Item
// =============================================================================

/// A persisted inventory item.
///
/// Values handed out by the repository are detached copies; changing one
/// has no effect on storage until it goes back through an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Storage-assigned identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Category the item is grouped under (exact, case-sensitive).
    pub category: String,

    /// Free-form description.
    pub description: Option<String>,

    /// Units on hand.
    pub quantity: i64,

    /// Unit price.
    pub price: f64,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Where the item is shelved.
    pub location: Option<String>,

    /// When the item was created.
    pub created_at: DateTime<Utc>,

    /// When the item was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Monetary value of the stock on hand (`quantity × price`).
    #[inline]
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Checks whether the item is at or below the given stock threshold.
    #[inline]
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.quantity <= threshold
    }
}

// =============================================================================
// New Item
// =============================================================================

/// Fields supplied by a caller to create an item.
///
/// `quantity` and `price` default to zero when omitted from a payload.
///
/// ## Example
/// ```rust
/// use tuari_core::NewItem;
///
/// let item = NewItem::new("Dell XPS 13", "Electronics", "DXP13-001")
///     .quantity(8)
///     .price(1299.99)
///     .location("Warehouse A - Shelf 2");
/// assert_eq!(item.description, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
    pub sku: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl NewItem {
    /// Creates a new item with the required fields and defaults elsewhere.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        sku: impl Into<String>,
    ) -> Self {
        NewItem {
            name: name.into(),
            category: category.into(),
            description: None,
            quantity: 0,
            price: 0.0,
            sku: sku.into(),
            location: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the quantity on hand.
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the unit price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the storage location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

// =============================================================================
// Category Summary
// =============================================================================

/// Aggregate over all items sharing one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CategorySummary {
    pub category: String,

    /// Number of items in the category.
    pub item_count: i64,

    /// Σ quantity × price over the category.
    pub total_value: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(quantity: i64, price: f64) -> Item {
        let now = Utc::now();
        Item {
            id: 1,
            name: "Wireless Mouse".to_string(),
            category: "Accessories".to_string(),
            description: None,
            quantity,
            price,
            sku: "WM001".to_string(),
            location: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(sample_item(2, 100.0).stock_value(), 200.0);
        assert_eq!(sample_item(0, 100.0).stock_value(), 0.0);
    }

    #[test]
    fn test_low_stock_boundary() {
        assert!(sample_item(10, 1.0).is_low_stock(10));
        assert!(!sample_item(11, 1.0).is_low_stock(10));
    }

    #[test]
    fn test_new_item_defaults_from_json() {
        let item: NewItem = serde_json::from_str(
            r#"{"name": "Desk Lamp", "category": "Office", "sku": "DL-1"}"#,
        )
        .unwrap();

        assert_eq!(item.quantity, 0);
        assert_eq!(item.price, 0.0);
        assert_eq!(item.description, None);
        assert_eq!(item.location, None);
    }
}
