//! Tests for SqliteItemRepository.

use crate::db::{Database, ItemRepository, ItemStatus, ListRepository, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn create_defaults_to_active_without_completion() {
    let db = setup_db().await;
    let list = db.lists().create("C1", "Groceries").await.unwrap();

    let item = db
        .items()
        .create(list.id, "Milk")
        .await
        .expect("Create should succeed");

    assert_eq!(item.list_id, list.id);
    assert_eq!(item.name, "Milk");
    assert_eq!(item.status, ItemStatus::Active);
    assert_eq!(item.completed_at, None);
    assert!(!item.created_at.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_for_list_filters_completed_unless_asked() {
    let db = setup_db().await;
    let list = db.lists().create("C1", "Groceries").await.unwrap();
    let items = db.items();

    items.create(list.id, "Milk").await.unwrap();
    let eggs = items.create(list.id, "Eggs").await.unwrap();
    items.create(list.id, "Bread").await.unwrap();

    items
        .complete(eggs.id, "2025-03-04T10:15:30Z")
        .await
        .unwrap();

    let active = items.list_for_list(list.id, false).await.unwrap();
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|i| i.status == ItemStatus::Active));

    let all = items.list_for_list(list.id, true).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_for_list_orders_by_creation_time() {
    let db = setup_db().await;
    let list = db.lists().create("C1", "Groceries").await.unwrap();
    let items = db.items();

    let first = items.create(list.id, "Milk").await.unwrap();
    let second = items.create(list.id, "Eggs").await.unwrap();

    // Spread the timestamps apart; same-second inserts would otherwise tie.
    sqlx::query("UPDATE list_items SET created_at = '2025-01-01 08:00:00' WHERE id = ?")
        .bind(second.id)
        .execute(db.pool())
        .await
        .unwrap();
    sqlx::query("UPDATE list_items SET created_at = '2025-01-02 08:00:00' WHERE id = ?")
        .bind(first.id)
        .execute(db.pool())
        .await
        .unwrap();

    let ordered = items.list_for_list(list.id, true).await.unwrap();
    assert_eq!(ordered[0].name, "Eggs");
    assert_eq!(ordered[1].name, "Milk");
}

#[tokio::test(flavor = "multi_thread")]
async fn find_active_ignores_completed_items() {
    let db = setup_db().await;
    let list = db.lists().create("C1", "Groceries").await.unwrap();
    let items = db.items();

    let milk = items.create(list.id, "Milk").await.unwrap();

    let found = items.find_active(list.id, "Milk").await.unwrap();
    assert_eq!(found.unwrap().id, milk.id);

    items
        .complete(milk.id, "2025-03-04T10:15:30Z")
        .await
        .unwrap();

    let gone = items.find_active(list.id, "Milk").await.unwrap();
    assert!(gone.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn complete_sets_status_and_timestamp_together() {
    let db = setup_db().await;
    let list = db.lists().create("C1", "Groceries").await.unwrap();
    let items = db.items();

    let milk = items.create(list.id, "Milk").await.unwrap();
    items
        .complete(milk.id, "2025-03-04T10:15:30Z")
        .await
        .expect("Complete should succeed");

    let all = items.list_for_list(list.id, true).await.unwrap();
    assert_eq!(all[0].status, ItemStatus::Completed);
    assert_eq!(all[0].completed_at.as_deref(), Some("2025-03-04T10:15:30Z"));
}

#[tokio::test(flavor = "multi_thread")]
async fn complete_twice_fails_and_keeps_first_timestamp() {
    let db = setup_db().await;
    let list = db.lists().create("C1", "Groceries").await.unwrap();
    let items = db.items();

    let milk = items.create(list.id, "Milk").await.unwrap();
    items
        .complete(milk.id, "2025-03-04T10:15:30Z")
        .await
        .unwrap();

    let second = items.complete(milk.id, "2025-03-05T09:00:00Z").await;
    assert!(second.is_err());

    let all = items.list_for_list(list.id, true).await.unwrap();
    assert_eq!(all[0].completed_at.as_deref(), Some("2025-03-04T10:15:30Z"));
}

#[tokio::test(flavor = "multi_thread")]
async fn complete_nonexistent_item_fails() {
    let db = setup_db().await;
    let items = db.items();

    let result = items.complete(9999, "2025-03-04T10:15:30Z").await;
    assert!(result.is_err());
}
