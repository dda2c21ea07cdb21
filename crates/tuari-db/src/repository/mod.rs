//! # Repository Module
//!
//! Database repository implementations for Tuari Inventory.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │  Items are plain data; they carry no connection and no save() method.  │
//! │                                                                         │
//! │  HTTP handler (outside workspace)                                      │
//! │       │                                                                 │
//! │       │  db.items().list_by_category("Electronics", page)              │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── add / get / get_by_sku / update / delete     (CRUD)               │
//! │  ├── list / list_by_category / search / low_stock (queries)            │
//! │  └── category_summary                             (aggregation)        │
//! │       │                                                                 │
//! │       │  SQL, one transaction per mutation                              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`](item::ItemRepository) - Item CRUD, paged queries and category summaries

pub mod item;
