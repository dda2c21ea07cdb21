//! Shared fixtures for the tuari-db integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tuari_core::NewItem;
use tuari_db::{Database, DbConfig};

/// Fresh private in-memory database with the schema in place.
pub async fn memory_db() -> Database {
    Database::new(DbConfig::in_memory()).await.expect("open in-memory db")
}

/// On-disk database in the temp directory, removed (with its WAL files) on drop.
pub struct TempDb {
    pub db: Database,
    path: PathBuf,
}

impl TempDb {
    pub async fn open(max_connections: u32) -> Self {
        let path = std::env::temp_dir().join(format!("tuari-test-{}.db", uuid::Uuid::new_v4()));
        let config = DbConfig::new(&path).max_connections(max_connections);
        let db = Database::new(config).await.expect("open file db");
        TempDb { db, path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

pub fn laptop() -> NewItem {
    NewItem::new("MacBook Pro 16-inch", "Electronics", "MBP16-001")
        .description("Apple MacBook Pro with M2 Pro chip")
        .quantity(15)
        .price(2499.99)
        .location("Warehouse A - Shelf 1")
}

pub fn mouse() -> NewItem {
    NewItem::new("Wireless Mouse", "Accessories", "WM001")
        .description("Logitech MX Master 3S Wireless Mouse")
        .quantity(45)
        .price(99.99)
}

/// Inserts `count` items named `{prefix} {n}` in `category`, SKUs `{prefix}-{n}`.
pub async fn add_many(db: &Database, prefix: &str, category: &str, count: usize) {
    let items = db.items();
    for n in 0..count {
        let item = NewItem::new(format!("{prefix} {n}"), category, format!("{prefix}-{n}"))
            .quantity(n as i64)
            .price(1.0);
        items.add(&item).await.expect("add item");
    }
}
