//! HTTP surface for the todo service.
//!
//! # Overview
//! Routes `/todo/api` (list, create) and `/todo/api/{id}` (retrieve, update,
//! delete) onto a [`TodoRepository`]. Handlers stay thin — each validates
//! its payload and maps the repository outcome onto a status code and body.
//!
//! # Design
//! - Validation failures and missing records both answer 400, matching the
//!   wire contract existing clients depend on. Missing records use the
//!   `{"res": …}` bodies; validation failures use the field-error map.
//! - The router is built over `Arc<dyn TodoRepository>` so tests and
//!   alternative backends inject their own store.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use todo_core::{CreateTodo, MemoryRepo, TodoRepr, TodoRepository, UpdateTodo};

pub type Repo = Arc<dyn TodoRepository>;

/// Build the router over the given repository.
pub fn app(repo: Repo) -> Router {
    Router::new()
        .route("/todo/api", get(list_todos).post(create_todo))
        .route(
            "/todo/api/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(repo)
}

/// Build the router over a fresh in-memory repository.
pub fn memory_app() -> Router {
    app(Arc::new(MemoryRepo::default()))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, memory_app()).await
}

async fn list_todos(State(repo): State<Repo>) -> Response {
    match repo.list().await {
        Ok(records) => Json(records.iter().map(TodoRepr::from).collect::<Vec<_>>()).into_response(),
        Err(error) => storage_failure(error),
    }
}

async fn create_todo(State(repo): State<Repo>, Json(input): Json<CreateTodo>) -> Response {
    let new = match input.validate() {
        Ok(new) => new,
        Err(errors) => return (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
    };
    match repo.create(new).await {
        Ok(record) => (StatusCode::CREATED, Json(TodoRepr::from(&record))).into_response(),
        Err(error) => storage_failure(error),
    }
}

async fn get_todo(State(repo): State<Repo>, Path(id): Path<i64>) -> Response {
    match repo.find(id).await {
        Ok(Some(record)) => Json(TodoRepr::from(&record)).into_response(),
        Ok(None) => missing_object("Object does not exist"),
        Err(error) => storage_failure(error),
    }
}

async fn update_todo(
    State(repo): State<Repo>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> Response {
    // Existence is checked before the payload, so a bad payload against a
    // missing id still answers with the missing-object body.
    match repo.find(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return missing_object("Object with todo id does not exists"),
        Err(error) => return storage_failure(error),
    }
    let patch = match input.validate() {
        Ok(patch) => patch,
        Err(errors) => return (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
    };
    match repo.update(id, patch).await {
        Ok(Some(record)) => Json(TodoRepr::from(&record)).into_response(),
        Ok(None) => missing_object("Object with todo id does not exists"),
        Err(error) => storage_failure(error),
    }
}

async fn delete_todo(State(repo): State<Repo>, Path(id): Path<i64>) -> Response {
    match repo.delete(id).await {
        Ok(true) => Json(json!({ "res": "Object deleted!" })).into_response(),
        Ok(false) => missing_object("Object with todo id does not exists"),
        Err(error) => storage_failure(error),
    }
}

fn missing_object(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "res": message }))).into_response()
}

fn storage_failure(error: anyhow::Error) -> Response {
    tracing::error!(%error, "repository operation failed");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
