//! Tests for MCP Streamable HTTP service integration.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use crate::db::{Database, SqliteDatabase};
use crate::store::{CreateMode, ListStore};

async fn setup_store() -> Arc<ListStore<SqliteDatabase>> {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Failed to run migrations");
    Arc::new(ListStore::new(Arc::new(db), CreateMode::AutoCreate))
}

#[tokio::test(flavor = "multi_thread")]
async fn service_nests_into_router() {
    let store = setup_store().await;
    let ct = CancellationToken::new();
    let service = super::create_mcp_service(store, ct);

    let app = Router::new().nest_service("/mcp", service);

    // Root path should return 404 (only /mcp is mounted)
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn service_responds_on_mount_point() {
    let store = setup_store().await;
    let ct = CancellationToken::new();
    let service = super::create_mcp_service(store, ct);
    let app = Router::new().nest_service("/mcp", service);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/mcp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // rmcp answers protocol errors itself; anything but 404 means the
    // service is mounted and responding.
    assert_ne!(response.status(), StatusCode::NOT_FOUND);
}
