//! # tuari-core: Pure Inventory Types for Tuari
//!
//! This crate holds the domain vocabulary of the inventory catalog as plain
//! data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Tuari Inventory Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (outside workspace)                 │   │
//! │  │    POST /api/items, GET /api/items, GET /api/categories ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tuari-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ pagination │  │   patch   │  │ validation│  │   │
//! │  │   │   Item    │  │ PageRequest│  │ ItemPatch │  │   rules   │  │   │
//! │  │   │  NewItem  │  │   Page<T>  │  │FieldUpdate│  │  checks   │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tuari-db (Database Layer)                    │   │
//! │  │            SQLite schema, transactions, repositories            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, NewItem, CategorySummary)
//! - [`patch`] - Partial updates with an explicit set/unset wrapper
//! - [`pagination`] - Page requests and paged results
//! - [`error`] - Validation error types
//! - [`validation`] - Field constraint checks
//!
//! ## Example Usage
//!
//! ```rust
//! use tuari_core::{ItemPatch, NewItem, PageRequest};
//!
//! let item = NewItem::new("Wireless Mouse", "Accessories", "WM001")
//!     .quantity(45)
//!     .price(99.99);
//! assert!(tuari_core::validation::validate_new_item(&item).is_ok());
//!
//! let patch = ItemPatch::new().quantity(0);
//! assert!(!patch.is_empty());
//!
//! let page = PageRequest::new(3, 50).unwrap();
//! assert_eq!(page.offset(), 100);
//! assert_eq!(page.total_pages(125), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pagination;
pub mod patch;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use pagination::{Page, PageRequest};
pub use patch::{FieldUpdate, ItemPatch};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity at or below which an item counts as low stock when the caller
/// doesn't supply a threshold.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Page size used when the caller doesn't ask for one.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Largest page a caller may request.
pub const MAX_PER_PAGE: u32 = 100;

/// Maximum length (in characters) of an item name.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of a category.
pub const MAX_CATEGORY_LEN: usize = 100;

/// Maximum length of a description.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Maximum length of a SKU.
pub const MAX_SKU_LEN: usize = 100;

/// Maximum length of a storage location.
pub const MAX_LOCATION_LEN: usize = 100;
