//! # tuari-db: Database Layer for Tuari Inventory
//!
//! This crate provides database access for the inventory catalog.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tuari Inventory Data Flow                          │
//! │                                                                         │
//! │  HTTP handler (GET /api/items?search=mouse)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tuari-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (item.rs)    │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ItemRepository│    │ 001_create_  │  │   │
//! │  │   │ DbConfig      │    │               │    │   items.sql  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                     ./data/inventory.db                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded schema and index definition
//! - [`error`] - Database error types
//! - [`repository`] - Item repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tuari_db::{Database, DbConfig};
//! use tuari_core::{NewItem, PageRequest};
//!
//! let db = Database::new(DbConfig::new("./data/inventory.db")).await?;
//!
//! let item = db.items().add(&NewItem::new("Wireless Mouse", "Accessories", "WM001")).await?;
//! let page = db.items().search("mouse", PageRequest::default()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::item::ItemRepository;
