//! # Database Migrations
//!
//! Embedded SQL that declares the `items` table and its index set.
//!
//! ## How Schema Setup Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schema Setup                                       │
//! │                                                                         │
//! │  Database::ensure_schema()                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table (create if missing)                      │
//! │       │                                                                 │
//! │       ├── 001_create_items.sql ✓ applied → nothing to do               │
//! │       └── 001_create_items.sql ⬜ pending → run it in a transaction    │
//! │                                                                         │
//! │  The SQL itself uses IF NOT EXISTS, so a table created by an older     │
//! │  deployment without the bookkeeping table is adopted, not clobbered.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Index Set
//! - Primary key `id`, unique `sku`
//! - Single column: name, category, quantity, price, location, created_at, updated_at
//! - Composite: (category, name), (sku, category), (quantity, price), (created_at, updated_at)

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Transactional: each migration runs in a transaction
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Returns information about migrations.
///
/// ## Returns
/// Tuple of (total_migrations, applied_migrations)
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    // The bookkeeping table doesn't exist before the first run.
    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
        .unwrap_or(0);

    Ok((total, applied as usize))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn index_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'items' \
             AND name NOT LIKE 'sqlite_autoindex_%' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();
        assert_eq!(migration_status(db.pool()).await.unwrap(), (1, 0));

        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();

        assert_eq!(migration_status(db.pool()).await.unwrap(), (1, 1));
    }

    #[tokio::test]
    async fn test_index_set() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let names = index_names(db.pool()).await;
        for expected in [
            "idx_items_sku",
            "idx_items_name",
            "idx_items_category",
            "idx_items_quantity",
            "idx_items_price",
            "idx_items_location",
            "idx_items_created_at",
            "idx_items_updated_at",
            "idx_category_name",
            "idx_sku_category",
            "idx_quantity_price",
            "idx_created_updated",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing index {expected}");
        }
    }
}
