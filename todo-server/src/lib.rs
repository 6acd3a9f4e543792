//! In-memory todo list service.
//!
//! # Design
//! The list is an ordered `Vec<TodoItem>` shared between handlers through
//! [`TodoStore`]. Appends take the write lock for the duration of a single
//! `push`, so concurrent requests never interleave partially. Nothing is
//! persisted; the list lives as long as the router that owns it.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    #[serde(default)]
    pub is_done: bool,
}

/// Ordered, process-lifetime list of todo items.
#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    items: Arc<RwLock<Vec<TodoItem>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `item` to the end of the list and hand it back unchanged.
    pub async fn append(&self, item: TodoItem) -> TodoItem {
        let mut items = self.items.write().await;
        items.push(item.clone());
        tracing::debug!(count = items.len(), "todo appended");
        item
    }

    /// Snapshot of the whole list in insertion order.
    pub async fn list(&self) -> Vec<TodoItem> {
        self.items.read().await.clone()
    }
}

/// Client-facing error, rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

pub fn app() -> Router {
    app_with_store(TodoStore::new())
}

/// Build the router around an existing store, e.g. to inspect it from tests.
pub fn app_with_store(store: TodoStore) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/todos", get(list_todos).post(append_todo))
        .route("/error-demo", get(error_demo))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    tracing::info!(addr = %listener.local_addr()?, "todo service listening");
    axum::serve(listener, app()).await
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the Todo API" }))
}

async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<TodoItem>> {
    Json(store.list().await)
}

async fn append_todo(
    State(store): State<TodoStore>,
    payload: Result<Json<TodoItem>, JsonRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let Json(item) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "rejected todo payload");
        ApiError::from(rejection)
    })?;
    Ok(Json(store.append(item).await))
}

async fn error_demo() -> impl IntoResponse {
    (
        StatusCode::IM_A_TEAPOT,
        [("x-error", "Demo error header")],
        Json(json!({ "detail": "This is a demo error response" })),
    )
}
