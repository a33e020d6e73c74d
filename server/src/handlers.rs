//! Request handlers for the todo routes.
//!
//! Bodies arrive as raw bytes and are parsed here rather than through the
//! `Json` extractor: every malformed body must answer 400, and the update
//! handler has to look the record up before it looks at the body.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::{parse_json, CreateTodo, TodoRecord, UpdateTodo};
use crate::store::TodoStore;

pub async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<TodoRecord>> {
    Json(store.list().await)
}

pub async fn create_todo(
    State(store): State<TodoStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<TodoRecord>), ApiError> {
    let todo = parse_json::<CreateTodo>(&body)
        .and_then(|input| input.into_record(Uuid::new_v4().to_string()))
        .inspect_err(|e| tracing::debug!(error = %e, "rejected create"))?;
    store.put(todo.clone()).await;
    tracing::info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<Json<TodoRecord>, ApiError> {
    store.get(&id).await.map(Json).ok_or(ApiError::NotFound)
}

pub async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TodoRecord>, ApiError> {
    if store.get(&id).await.is_none() {
        return Err(ApiError::NotFound);
    }
    let patch = parse_json::<UpdateTodo>(&body)
        .inspect_err(|e| tracing::debug!(%id, error = %e, "rejected update"))?;
    // A delete may land between the lookup above and this write.
    let todo = store
        .update(&id, |todo| patch.apply(todo))
        .await
        .ok_or(ApiError::NotFound)?;
    tracing::info!(%id, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !store.delete(&id).await {
        return Err(ApiError::NotFound);
    }
    tracing::info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
