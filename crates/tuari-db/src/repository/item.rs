//! # Item Repository
//!
//! Database operations for inventory items.
//!
//! ## Key Operations
//! - CRUD with SKU uniqueness and partial updates
//! - Paged listing, category filter and substring search
//! - Low-stock report and per-category summary
//!
//! ## Transaction Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  add / update / delete                                  │
//! │                                                                         │
//! │  BEGIN                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  write statement first (takes SQLite's write lock up front)            │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  read back the row inside the same transaction                         │
//! │    │                                                                    │
//! │    ├── Ok  ──► COMMIT   ──► return detached copy                       │
//! │    └── Err ──► ROLLBACK ──► return error (nothing visible to readers)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Paged reads run the count and the page fetch inside one read transaction
//! so `total` and `items` come from the same snapshot.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteConnection;
use sqlx::{QueryBuilder, Sqlite, SqlitePool, Transaction};
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use tuari_core::validation::{validate_new_item, validate_patch, validate_threshold};
use tuari_core::{CategorySummary, FieldUpdate, Item, ItemPatch, NewItem, Page, PageRequest};

/// Column list shared by the dynamically built queries.
const ITEM_COLUMNS: &str =
    "id, name, category, description, quantity, price, sku, location, created_at, updated_at";

/// Row filter for paged listings.
#[derive(Debug, Clone)]
enum ItemFilter<'a> {
    All,
    Category(&'a str),
    /// Holds an already escaped LIKE pattern.
    Search(String),
}

impl ItemFilter<'_> {
    fn push_where<'q>(&'q self, query: &mut QueryBuilder<'q, Sqlite>) {
        match self {
            ItemFilter::All => {}
            ItemFilter::Category(category) => {
                query.push(" WHERE category = ").push_bind(*category);
            }
            ItemFilter::Search(pattern) => {
                query
                    .push(" WHERE (name LIKE ")
                    .push_bind(pattern.as_str())
                    .push(" ESCAPE '\\' OR sku LIKE ")
                    .push_bind(pattern.as_str())
                    .push(" ESCAPE '\\' OR description LIKE ")
                    .push_bind(pattern.as_str())
                    .push(" ESCAPE '\\')");
            }
        }
    }
}

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// let item = repo.add(&NewItem::new("Wireless Mouse", "Accessories", "WM001")).await?;
/// let item = repo.update(item.id, &ItemPatch::new().quantity(3)).await?;
/// let low = repo.low_stock(DEFAULT_LOW_STOCK_THRESHOLD).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Adds a new item.
    ///
    /// The SKU lookup up front is only a fast path; concurrent writers can
    /// both pass it, and the UNIQUE index on `sku` decides which one wins.
    ///
    /// ## Returns
    /// * `Ok(Item)` - Stored item with generated id and timestamps
    /// * `Err(DbError::Validation)` - A field violates its constraint
    /// * `Err(DbError::Conflict)` - SKU already exists
    pub async fn add(&self, new_item: &NewItem) -> DbResult<Item> {
        validate_new_item(new_item)?;

        debug!(sku = %new_item.sku, "Adding item");

        if self.get_by_sku(&new_item.sku).await?.is_some() {
            return Err(DbError::conflict("sku", &new_item.sku));
        }

        let mut tx = self.begin().await?;
        let result = insert_item(&mut tx, new_item, Utc::now()).await;
        let item = finish(tx, result, "add").await?;

        info!(id = item.id, sku = %item.sku, name = %item.name, "Added item");
        Ok(item)
    }

    /// Gets an item by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get(&self, id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT
                id, name, category, description, quantity, price,
                sku, location, created_at, updated_at
            FROM items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Gets an item by its SKU (served by the unique SKU index).
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_by_sku(&self, sku: &str) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT
                id, name, category, description, quantity, price,
                sku, location, created_at, updated_at
            FROM items
            WHERE sku = ?
            "#,
        )
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Applies a partial update.
    ///
    /// Only fields set in the patch are written; `updated_at` is refreshed
    /// on every successful call, including an empty patch.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The item as stored after the update
    /// * `Err(DbError::NotFound)` - No item with this id
    /// * `Err(DbError::Conflict)` - New SKU belongs to another item
    pub async fn update(&self, id: i64, patch: &ItemPatch) -> DbResult<Item> {
        validate_patch(patch)?;

        debug!(id, fields = ?patch.set_fields(), "Updating item");

        let mut tx = self.begin().await?;
        let result = update_item(&mut tx, id, patch, Utc::now()).await;
        let item = finish(tx, result, "update").await?;

        info!(id, name = %item.name, "Updated item");
        Ok(item)
    }

    /// Deletes an item.
    ///
    /// ## Returns
    /// * `Ok(true)` - Item existed and is gone
    /// * `Ok(false)` - Nothing to delete
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting item");

        let mut tx = self.begin().await?;
        let result = delete_item(&mut tx, id).await;
        let deleted = finish(tx, result, "delete").await?;

        if deleted {
            info!(id, "Deleted item");
        }
        Ok(deleted)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Lists all items in id order.
    pub async fn list(&self, request: PageRequest) -> DbResult<Page<Item>> {
        debug!(page = request.page(), per_page = request.per_page(), "Listing items");
        self.paged(&ItemFilter::All, request).await
    }

    /// Lists items whose category matches exactly (case-sensitive).
    pub async fn list_by_category(
        &self,
        category: &str,
        request: PageRequest,
    ) -> DbResult<Page<Item>> {
        debug!(category = %category, page = request.page(), "Listing items by category");
        self.paged(&ItemFilter::Category(category), request).await
    }

    /// Searches name, SKU and description for a case-insensitive substring.
    ///
    /// `%` and `_` in the term match themselves, not LIKE wildcards.
    pub async fn search(&self, term: &str, request: PageRequest) -> DbResult<Page<Item>> {
        debug!(term = %term, page = request.page(), "Searching items");
        self.paged(&ItemFilter::Search(like_pattern(term)), request)
            .await
    }

    /// Lists items, searching when a non-empty term is given.
    pub async fn list_items(
        &self,
        search: Option<&str>,
        request: PageRequest,
    ) -> DbResult<Page<Item>> {
        match search.filter(|term| !term.is_empty()) {
            Some(term) => self.search(term, request).await,
            None => self.list(request).await,
        }
    }

    /// Returns every item with `quantity <= threshold`, in id order.
    ///
    /// Not paginated, unlike the other listings.
    pub async fn low_stock(&self, threshold: i64) -> DbResult<Vec<Item>> {
        validate_threshold(threshold)?;

        debug!(threshold, "Listing low-stock items");

        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT
                id, name, category, description, quantity, price,
                sku, location, created_at, updated_at
            FROM items
            WHERE quantity <= ?
            ORDER BY id
            "#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Low-stock query returned items");
        Ok(items)
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Summarizes every category: item count and Σ quantity × price.
    ///
    /// Groups are ordered by category name.
    pub async fn category_summary(&self) -> DbResult<Vec<CategorySummary>> {
        let summaries = sqlx::query_as::<_, CategorySummary>(
            r#"
            SELECT
                category,
                COUNT(id) AS item_count,
                CAST(COALESCE(SUM(quantity * price), 0) AS REAL) AS total_value
            FROM items
            GROUP BY category
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(categories = summaries.len(), "Category summary computed");
        Ok(summaries)
    }

    /// Counts all items.
    pub async fn count(&self) -> DbResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn begin(&self) -> DbResult<Transaction<'static, Sqlite>> {
        self.pool.begin().await.map_err(DbError::transaction)
    }

    async fn paged(&self, filter: &ItemFilter<'_>, request: PageRequest) -> DbResult<Page<Item>> {
        let mut tx = self.begin().await?;

        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM items");
        filter.push_where(&mut count_query);
        let total: i64 = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&mut *tx)
            .await?;

        let mut page_query = QueryBuilder::new(format!("SELECT {ITEM_COLUMNS} FROM items"));
        filter.push_where(&mut page_query);
        page_query
            .push(" ORDER BY id LIMIT ")
            .push_bind(to_sql_int(request.limit()))
            .push(" OFFSET ")
            .push_bind(to_sql_int(request.offset()));
        let items: Vec<Item> = page_query
            .build_query_as::<Item>()
            .fetch_all(&mut *tx)
            .await?;

        // Read-only; committing just releases the snapshot.
        tx.commit().await.map_err(DbError::transaction)?;

        debug!(total, returned = items.len(), "Paged query complete");
        Ok(Page::new(items, total as u64, request))
    }
}

// =============================================================================
// Transaction Bodies
// =============================================================================

async fn insert_item(
    conn: &mut SqliteConnection,
    new_item: &NewItem,
    now: DateTime<Utc>,
) -> DbResult<Item> {
    let result = sqlx::query(
        r#"
        INSERT INTO items (
            name, category, description, quantity, price,
            sku, location, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new_item.name)
    .bind(&new_item.category)
    .bind(&new_item.description)
    .bind(new_item.quantity)
    .bind(new_item.price)
    .bind(&new_item.sku)
    .bind(&new_item.location)
    .bind(now)
    .bind(now)
    .execute(&mut *conn)
    .await
    .map_err(|e| sku_conflict(e, &new_item.sku))?;

    let id = result.last_insert_rowid();
    fetch_item(conn, id)
        .await?
        .ok_or_else(|| DbError::Internal(format!("inserted item {id} not readable")))
}

async fn update_item(
    conn: &mut SqliteConnection,
    id: i64,
    patch: &ItemPatch,
    now: DateTime<Utc>,
) -> DbResult<Item> {
    let mut query = QueryBuilder::<Sqlite>::new("UPDATE items SET updated_at = ");
    query.push_bind(now);

    if let FieldUpdate::Set(name) = &patch.name {
        query.push(", name = ").push_bind(name.as_str());
    }
    if let FieldUpdate::Set(category) = &patch.category {
        query.push(", category = ").push_bind(category.as_str());
    }
    if let FieldUpdate::Set(description) = &patch.description {
        query.push(", description = ").push_bind(description.as_deref());
    }
    if let FieldUpdate::Set(quantity) = patch.quantity {
        query.push(", quantity = ").push_bind(quantity);
    }
    if let FieldUpdate::Set(price) = patch.price {
        query.push(", price = ").push_bind(price);
    }
    if let FieldUpdate::Set(sku) = &patch.sku {
        query.push(", sku = ").push_bind(sku.as_str());
    }
    if let FieldUpdate::Set(location) = &patch.location {
        query.push(", location = ").push_bind(location.as_deref());
    }

    query.push(" WHERE id = ").push_bind(id);

    let result = query.build().execute(&mut *conn).await.map_err(|e| {
        let sku = patch.sku.as_set().map(String::as_str).unwrap_or("unknown");
        sku_conflict(e, sku)
    })?;

    if result.rows_affected() == 0 {
        return Err(DbError::not_found("Item", id));
    }

    fetch_item(conn, id)
        .await?
        .ok_or_else(|| DbError::not_found("Item", id))
}

async fn delete_item(conn: &mut SqliteConnection, id: i64) -> DbResult<bool> {
    let result = sqlx::query("DELETE FROM items WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

async fn fetch_item(conn: &mut SqliteConnection, id: i64) -> DbResult<Option<Item>> {
    let item = sqlx::query_as::<_, Item>(
        r#"
        SELECT
            id, name, category, description, quantity, price,
            sku, location, created_at, updated_at
        FROM items
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(item)
}

/// Commits on success, rolls back on failure, then hands the result back.
async fn finish<T>(
    tx: Transaction<'static, Sqlite>,
    result: DbResult<T>,
    operation: &'static str,
) -> DbResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await.map_err(DbError::transaction)?;
            Ok(value)
        }
        Err(err) => {
            warn!(operation, error = %err, "Rolling back transaction");
            if let Err(rollback_err) = tx.rollback().await {
                warn!(operation, error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Maps a UNIQUE violation on `sku` to a conflict naming the offending value.
fn sku_conflict(err: sqlx::Error, sku: &str) -> DbError {
    match DbError::from(err) {
        DbError::Conflict { field, .. } if field.ends_with("sku") => DbError::conflict("sku", sku),
        other => other,
    }
}

/// Wraps a term in `%…%`, escaping LIKE metacharacters with `\`.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

// =============================================================================
// Unit Tests
// =============================================================================
