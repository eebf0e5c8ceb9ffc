//! Topic CRUD handlers.

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
use coact_core::models::{Pagination, Topic, TopicWrite};
use coact_core::AppError;

#[utoipa::path(
    post,
    path = "/api/v1/topics",
    tag = "content",
    request_body = TopicWrite,
    responses(
        (status = 201, description = "Topic created", body = Topic),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "create_topic"))]
pub async fn create_topic(
    State(state): State<Arc<AppState>>,
    ValidatedJson(write): ValidatedJson<TopicWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    write.validate().map_err(AppError::from)?;

    let topic = state.db.topics.create(&write).await.map_err(AppError::from)?;
    Ok((StatusCode::CREATED, Json(topic)))
}

#[utoipa::path(
    get,
    path = "/api/v1/topics",
    tag = "content",
    params(Pagination),
    responses(
        (status = 200, description = "List of topics", body = Vec<Topic>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_topics"))]
pub async fn list_topics(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HttpAppError> {
    let topics = state.db.topics.list(pagination).await.map_err(AppError::from)?;
    Ok(Json(topics))
}

#[utoipa::path(
    get,
    path = "/api/v1/topics/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic found", body = Topic),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_topic"))]
pub async fn get_topic(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let topic = state
        .db
        .topics
        .get(id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))?;
    Ok(Json(topic))
}

#[utoipa::path(
    put,
    path = "/api/v1/topics/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Topic id")),
    request_body = TopicWrite,
    responses(
        (status = 200, description = "Topic updated", body = Topic),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "update_topic"))]
pub async fn update_topic(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(write): ValidatedJson<TopicWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    write.validate().map_err(AppError::from)?;

    let topic = state
        .db
        .topics
        .update(id, &write)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))?;
    Ok(Json(topic))
}

#[utoipa::path(
    delete,
    path = "/api/v1/topics/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 204, description = "Topic deleted"),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_topic"))]
pub async fn delete_topic(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.topics.delete(id).await.map_err(AppError::from)?;
    if !deleted {
        return Err(HttpAppError::from(AppError::NotFound(
            "Topic not found".to_string(),
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
