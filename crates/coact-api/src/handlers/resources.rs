//! Resource CRUD handlers.

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
use coact_core::models::{Pagination, Resource, ResourceWrite};
use coact_core::AppError;

#[utoipa::path(
    post,
    path = "/api/v1/resources",
    tag = "content",
    request_body = ResourceWrite,
    responses(
        (status = 201, description = "Resource created", body = Resource),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "create_resource"))]
pub async fn create_resource(
    State(state): State<Arc<AppState>>,
    ValidatedJson(write): ValidatedJson<ResourceWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    write.validate().map_err(AppError::from)?;

    let resource = state
        .db
        .resources
        .create(&write)
        .await
        .map_err(AppError::from)?;
    Ok((StatusCode::CREATED, Json(resource)))
}

#[utoipa::path(
    get,
    path = "/api/v1/resources",
    tag = "content",
    params(Pagination),
    responses(
        (status = 200, description = "List of resources", body = Vec<Resource>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_resources"))]
pub async fn list_resources(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HttpAppError> {
    let resources = state
        .db
        .resources
        .list(pagination)
        .await
        .map_err(AppError::from)?;
    Ok(Json(resources))
}

#[utoipa::path(
    get,
    path = "/api/v1/resources/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Resource id")),
    responses(
        (status = 200, description = "Resource found", body = Resource),
        (status = 404, description = "Resource not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_resource"))]
pub async fn get_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let resource = state
        .db
        .resources
        .get(id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;
    Ok(Json(resource))
}

#[utoipa::path(
    put,
    path = "/api/v1/resources/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Resource id")),
    request_body = ResourceWrite,
    responses(
        (status = 200, description = "Resource updated", body = Resource),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Resource not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "update_resource"))]
pub async fn update_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(write): ValidatedJson<ResourceWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    write.validate().map_err(AppError::from)?;

    let resource = state
        .db
        .resources
        .update(id, &write)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;
    Ok(Json(resource))
}

#[utoipa::path(
    delete,
    path = "/api/v1/resources/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Resource id")),
    responses(
        (status = 204, description = "Resource deleted"),
        (status = 404, description = "Resource not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_resource"))]
pub async fn delete_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.resources.delete(id).await.map_err(AppError::from)?;
    if !deleted {
        return Err(HttpAppError::from(AppError::NotFound(
            "Resource not found".to_string(),
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
