//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use rollcall_core::{NewUser, RollcallError, User, UserChanges, UserId, UserStore};
use rollcall_server::{config::RunMode, create_router, state::AppState};
use rollcall_storage::SqliteUserStore;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Create an isolated in-memory store with the schema applied
pub async fn create_test_store() -> Arc<SqliteUserStore> {
    let store = SqliteUserStore::connect("sqlite::memory:")
        .await
        .expect("Failed to create test store");
    Arc::new(store)
}

/// Create a router over a fresh store seeded with the two fixture users
pub async fn create_test_app() -> (Router, Arc<SqliteUserStore>) {
    let store = create_test_store().await;
    for (name, email) in fixtures::SEED_USERS {
        store
            .create_user(NewUser::new(*name, *email))
            .await
            .expect("Failed to seed user");
    }

    let app = create_router(AppState::new(store.clone(), RunMode::Development));
    (app, store)
}

/// Send a request through the router and decode the JSON body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().uri(uri).method(method);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, body)
}

/// Send a request with a raw body and optional content type
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().uri(uri).method(method);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, body)
}

/// Store whose every operation fails with a driver error
pub struct FailingStore;

#[async_trait]
impl UserStore for FailingStore {
    async fn list_users(&self) -> rollcall_core::Result<Vec<User>> {
        Err(RollcallError::Database(fixtures::DRIVER_FAILURE.to_string()))
    }

    async fn create_user(&self, _user: NewUser) -> rollcall_core::Result<UserId> {
        Err(RollcallError::Database(fixtures::DRIVER_FAILURE.to_string()))
    }

    async fn get_user(&self, _id: UserId) -> rollcall_core::Result<User> {
        Err(RollcallError::Database(fixtures::DRIVER_FAILURE.to_string()))
    }

    async fn update_user(&self, _id: UserId, _changes: UserChanges) -> rollcall_core::Result<()> {
        Err(RollcallError::Database(fixtures::DRIVER_FAILURE.to_string()))
    }

    async fn delete_user(&self, _id: UserId) -> rollcall_core::Result<()> {
        Err(RollcallError::Database(fixtures::DRIVER_FAILURE.to_string()))
    }
}

/// Router over a store that always fails
pub fn create_failing_app(mode: RunMode) -> Router {
    create_router(AppState::new(Arc::new(FailingStore), mode))
}

/// Test fixtures
pub mod fixtures {
    pub const SEED_USERS: &[(&str, &str)] = &[
        ("John Doe", "john@example.com"),
        ("Jane Smith", "jane@example.com"),
    ];

    pub const DRIVER_FAILURE: &str = "disk I/O error";
}
