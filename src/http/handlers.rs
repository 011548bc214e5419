// Copyright (c) 2025 - Cowboy AI, Inc.
//! Todo HTTP handlers
//!
//! Each handler binds the wire request, calls one service operation and
//! renders the result as a [`TodoView`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use super::error::ApiError;
use super::views::{TodoBody, TodoView};
use super::AppState;
use crate::service::TodoIdRequest;

/// Handler result type
pub type ApiResult<T> = Result<T, ApiError>;

fn parse_id(raw: &str) -> ApiResult<u64> {
    raw.parse::<u64>()
        .map_err(|e| ApiError::bad_request(format!("invalid todo id {raw:?}: {e}")))
}

fn parse_body(body: Result<Json<TodoBody>, JsonRejection>) -> ApiResult<TodoBody> {
    body.map(|Json(body)| body).map_err(|rejection| {
        debug!(error = %rejection, "Rejected todo body");
        ApiError::bad_request(rejection.body_text())
    })
}

/// `GET /`
pub async fn hello() -> &'static str {
    "Hello, World!"
}

/// `GET /health`
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// `GET /todos`
pub async fn find_all(State(state): State<AppState>) -> ApiResult<Json<Vec<TodoView>>> {
    let todos = state.service.find_all().await?;
    Ok(Json(todos.iter().map(TodoView::from).collect()))
}

/// `GET /todos/{id}`
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoView>> {
    let id = parse_id(&id)?;
    let todo = state.service.find_by_id(TodoIdRequest::new(id)).await?;
    Ok(Json(TodoView::from(&todo)))
}

/// `POST /todos`
///
/// Storage assigns the identifier. Responds 201 with the created todo.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<TodoBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TodoView>)> {
    let request = parse_body(body)?.into_request(0);
    let todo = state.service.create(request).await?;
    Ok((StatusCode::CREATED, Json(TodoView::from(&todo))))
}

/// `PUT /todos/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TodoBody>, JsonRejection>,
) -> ApiResult<Json<TodoView>> {
    let id = parse_id(&id)?;
    let request = parse_body(body)?.into_request(id);
    let todo = state.service.update(request).await?;
    Ok(Json(TodoView::from(&todo)))
}

/// `DELETE /todos/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.service.delete(TodoIdRequest::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
