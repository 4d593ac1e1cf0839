//! Axum handlers translating HTTP requests into use-case calls.

use super::{
    AppState, HttpError,
    payloads::{
        CreateTodoPayload, CreatedResponse, HealthResponse, MessageResponse, UpdateTodoPayload,
    },
};
use crate::todo::{
    domain::{DomainError, ErrorKind, TodoId},
    services::{TodoListResponse, TodoResponse},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::debug;

type HandlerResult<T> = Result<T, HttpError>;

/// `GET /todos`
pub async fn list_todos(State(state): State<AppState>) -> HandlerResult<Json<TodoListResponse>> {
    state
        .use_case()
        .list_todos()
        .await
        .map(Json)
        .map_err(|err| state.reject(err))
}

/// `POST /todos`
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoPayload>, JsonRejection>,
) -> HandlerResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(body) = payload.map_err(|rejection| state.reject(invalid_json(&rejection)))?;
    let id = state
        .use_case()
        .create_todo(body.into())
        .await
        .map_err(|err| state.reject(err))?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_string() }),
    ))
}

/// `GET /todos/{id}`
pub async fn get_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<TodoResponse>> {
    let id = parse_id(&state, &raw_id)?;
    state
        .use_case()
        .get_todo(id)
        .await
        .map(Json)
        .map_err(|err| state.reject(err))
}

/// `PUT /todos/{id}`
pub async fn update_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateTodoPayload>, JsonRejection>,
) -> HandlerResult<Json<MessageResponse>> {
    let id = parse_id(&state, &raw_id)?;
    let Json(body) = payload.map_err(|rejection| state.reject(invalid_json(&rejection)))?;
    state
        .use_case()
        .update_todo(body.into_request(id))
        .await
        .map_err(|err| state.reject(err))?;
    Ok(Json(MessageResponse::new("Todo updated successfully")))
}

/// `PUT /todos/{id}/complete`
pub async fn complete_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<MessageResponse>> {
    let id = parse_id(&state, &raw_id)?;
    state
        .use_case()
        .complete_todo(id)
        .await
        .map_err(|err| state.reject(err))?;
    Ok(Json(MessageResponse::new("Todo completed successfully")))
}

/// `PUT /todos/{id}/archive`
pub async fn archive_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<MessageResponse>> {
    let id = parse_id(&state, &raw_id)?;
    state
        .use_case()
        .archive_todo(id)
        .await
        .map_err(|err| state.reject(err))?;
    Ok(Json(MessageResponse::new("Todo archived successfully")))
}

/// `DELETE /todos/{id}`
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<MessageResponse>> {
    let id = parse_id(&state, &raw_id)?;
    state
        .use_case()
        .delete_todo(id)
        .await
        .map_err(|err| state.reject(err))?;
    Ok(Json(MessageResponse::new("Todo deleted successfully")))
}

/// `GET /test-error`
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn test_error(State(state): State<AppState>) -> HttpError {
    state.reject(state.use_case().trigger_test_error())
}

/// `GET /health`
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

/// Identifiers that do not parse cannot name a stored todo.
fn parse_id(state: &AppState, raw: &str) -> HandlerResult<TodoId> {
    TodoId::parse(raw).map_err(|err| {
        debug!(id = %err.0, "rejecting malformed todo id");
        state.reject(DomainError::from(ErrorKind::TodoNotFound).with_detail("id", raw))
    })
}

fn invalid_json(rejection: &JsonRejection) -> DomainError {
    debug!(reason = %rejection.body_text(), "rejecting request body");
    DomainError::from(ErrorKind::InvalidJson).with_detail("reason", rejection.body_text())
}
