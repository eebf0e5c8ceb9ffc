//! Group CRUD handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::handlers::parse_ref;
use crate::state::AppState;
use coact_core::models::{Group, GroupWrite, Pagination};
use coact_core::AppError;

#[utoipa::path(
    post,
    path = "/api/v1/groups",
    tag = "groups",
    request_body = GroupWrite,
    responses(
        (status = 201, description = "Group created", body = Group),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Referenced creator does not exist", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "create_group"))]
pub async fn create_group(
    State(state): State<Arc<AppState>>,
    ValidatedJson(write): ValidatedJson<GroupWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    state
        .policies
        .group
        .validate(&write, state.db.directory.as_ref())
        .await?;

    let topic_id = parse_ref("topic", &write.topic)?;
    let created_by = parse_ref("created_by", &write.created_by)?;

    let group = state
        .db
        .groups
        .create(&write, topic_id, created_by)
        .await
        .map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(group)))
}

#[utoipa::path(
    get,
    path = "/api/v1/groups",
    tag = "groups",
    params(Pagination),
    responses(
        (status = 200, description = "List of groups", body = Vec<Group>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_groups"))]
pub async fn list_groups(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HttpAppError> {
    let groups = state.db.groups.list(pagination).await.map_err(AppError::from)?;
    Ok(Json(groups))
}

#[utoipa::path(
    get,
    path = "/api/v1/groups/{id}",
    tag = "groups",
    params(("id" = Uuid, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group found", body = Group),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_group"))]
pub async fn get_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let group = state
        .db
        .groups
        .get(id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;
    Ok(Json(group))
}

#[utoipa::path(
    put,
    path = "/api/v1/groups/{id}",
    tag = "groups",
    params(("id" = Uuid, Path, description = "Group id")),
    request_body = GroupWrite,
    responses(
        (status = 200, description = "Group updated", body = Group),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "update_group"))]
pub async fn update_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(write): ValidatedJson<GroupWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    state
        .policies
        .group
        .validate(&write, state.db.directory.as_ref())
        .await?;

    let topic_id = parse_ref("topic", &write.topic)?;
    let created_by = parse_ref("created_by", &write.created_by)?;

    let group = state
        .db
        .groups
        .update(id, &write, topic_id, created_by)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;

    Ok(Json(group))
}

#[utoipa::path(
    delete,
    path = "/api/v1/groups/{id}",
    tag = "groups",
    params(("id" = Uuid, Path, description = "Group id")),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_group"))]
pub async fn delete_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.groups.delete(id).await.map_err(AppError::from)?;

    if !deleted {
        return Err(HttpAppError::from(AppError::NotFound(
            "Group not found".to_string(),
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
