//! Task CRUD handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use coact_core::models::{Pagination, Task, TaskWrite};
use coact_core::AppError;

#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    tag = "content",
    request_body = TaskWrite,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "create_task"))]
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    ValidatedJson(write): ValidatedJson<TaskWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    write.validate().map_err(AppError::from)?;

    let task = state.db.tasks.create(&write).await.map_err(AppError::from)?;
    Ok((StatusCode::CREATED, Json(task)))
}

#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    tag = "content",
    params(Pagination),
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_tasks"))]
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HttpAppError> {
    let tasks = state.db.tasks.list(pagination).await.map_err(AppError::from)?;
    Ok(Json(tasks))
}

#[utoipa::path(
    get,
    path = "/api/v1/tasks/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_task"))]
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let task = state
        .db
        .tasks
        .get(id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
    Ok(Json(task))
}

#[utoipa::path(
    put,
    path = "/api/v1/tasks/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Task id")),
    request_body = TaskWrite,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "update_task"))]
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(write): ValidatedJson<TaskWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    write.validate().map_err(AppError::from)?;

    let task = state
        .db
        .tasks
        .update(id, &write)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
    Ok(Json(task))
}

#[utoipa::path(
    delete,
    path = "/api/v1/tasks/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Task id")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_task"))]
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.tasks.delete(id).await.map_err(AppError::from)?;
    if !deleted {
        return Err(HttpAppError::from(AppError::NotFound(
            "Task not found".to_string(),
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
