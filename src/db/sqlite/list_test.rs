//! Tests for SqliteListRepository.

use crate::db::{Database, ListRepository, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_id_and_timestamp() {
    let db = setup_db().await;
    let lists = db.lists();

    let list = lists
        .create("C1", "Groceries")
        .await
        .expect("Create should succeed");

    assert!(list.id > 0);
    assert_eq!(list.channel_id, "C1");
    assert_eq!(list.name, "Groceries");
    assert!(!list.created_at.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn find_by_name_scopes_to_channel() {
    let db = setup_db().await;
    let lists = db.lists();

    lists.create("C1", "Groceries").await.unwrap();
    lists.create("C2", "Groceries").await.unwrap();

    let found = lists.find_by_name("C1", "Groceries").await.unwrap();
    assert_eq!(found.unwrap().channel_id, "C1");

    let missing = lists.find_by_name("C3", "Groceries").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_lists_coexist_and_first_row_wins() {
    let db = setup_db().await;
    let lists = db.lists();

    // No uniqueness at the storage level: both inserts succeed.
    let first = lists.create("C1", "Groceries").await.unwrap();
    let second = lists.create("C1", "Groceries").await.unwrap();
    assert_ne!(first.id, second.id);

    let found = lists.find_by_name("C1", "Groceries").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_scoped_and_unscoped() {
    let db = setup_db().await;
    let lists = db.lists();

    lists.create("C1", "Groceries").await.unwrap();
    lists.create("C1", "Chores").await.unwrap();
    lists.create("C2", "Errands").await.unwrap();

    let scoped = lists.list(Some("C1")).await.unwrap();
    assert_eq!(scoped.len(), 2);
    assert!(scoped.iter().all(|l| l.channel_id == "C1"));

    let all = lists.list(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let empty = lists.list(Some("C9")).await.unwrap();
    assert!(empty.is_empty());
}
