use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use database::db::create_connection;
use management_client::mock::MockLookup;
use migration::{ActivityMigrator, ManagementMigrator, MigratorTrait, ReservationMigrator};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    app::{activity_router, management_router, reservation_router},
    state::{DependentState, ManagementState},
};

pub async fn memory_db<M: MigratorTrait>() -> DatabaseConnection {
    let db = create_connection("sqlite::memory:").await.unwrap();
    M::up(&db, None).await.unwrap();
    db
}

pub async fn management_app() -> Router {
    management_router(ManagementState::new(memory_db::<ManagementMigrator>().await))
}

pub async fn reservation_app(lookup: MockLookup) -> Router {
    let db = memory_db::<ReservationMigrator>().await;
    reservation_router(DependentState::new(db, lookup))
}

pub async fn activity_app(lookup: MockLookup) -> Router {
    let db = memory_db::<ActivityMigrator>().await;
    activity_router(DependentState::new(db, lookup))
}

/// Sends one request through `app`, returning the status and the body.
///
/// Bodies that are not JSON come back as a string, empty bodies as null.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, body)
}
