//! Concurrent access against an on-disk (WAL) database.

mod common;

use common::TempDb;
use tuari_core::{ItemPatch, NewItem, PageRequest};
use tuari_db::{Database, DbConfig, DbError};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_duplicate_adds_yield_one_conflict() {
    let temp = TempDb::open(5).await;
    let items = temp.db.items();
    let other = temp.db.items();

    let first = NewItem::new("Tablet", "Electronics", "TAB-1").quantity(4);
    let second = NewItem::new("Tablet (Bundle)", "Electronics", "TAB-1").quantity(2);

    let (a, b) = tokio::join!(items.add(&first), other.add(&second));

    let outcomes = [a, b];
    let added = outcomes.iter().filter(|r| r.is_ok()).count();
    let conflicts = outcomes
        .iter()
        .filter(|r| matches!(r, Err(DbError::Conflict { .. })))
        .count();
    assert_eq!((added, conflicts), (1, 1));
    assert_eq!(items.count().await.expect("count"), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_writers_serialize_cleanly() {
    let temp = TempDb::open(5).await;
    let mut handles = Vec::new();
    for worker in 0..8 {
        let db = temp.db.clone();
        handles.push(tokio::spawn(async move {
            let items = db.items();
            for n in 0..10 {
                let sku = format!("W{worker}-{n}");
                let item = items
                    .add(&NewItem::new(format!("Part {sku}"), "Bulk", sku))
                    .await?;
                items.update(item.id, &ItemPatch::new().quantity(n)).await?;
            }
            Ok::<_, DbError>(())
        }));
    }

    for handle in handles {
        handle.await.expect("join").expect("writer");
    }

    let items = temp.db.items();
    assert_eq!(items.count().await.expect("count"), 80);
    let listed = items.list(PageRequest::default()).await.expect("list");
    assert_eq!(listed.total, 80);
    assert_eq!(listed.total_pages, 2);
}

#[tokio::test]
async fn data_survives_reopen() {
    let temp = TempDb::open(2).await;
    let added = temp
        .db
        .items()
        .add(&NewItem::new("External SSD", "Storage", "ESSD-1").quantity(7))
        .await
        .expect("add");
    temp.db.close().await;

    let reopened = Database::new(DbConfig::new(temp.path()))
        .await
        .expect("reopen");
    let stored = reopened.items().get(added.id).await.expect("get");
    assert_eq!(stored, Some(added));
    reopened.close().await;
}
