//! Event CRUD handlers.

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
use coact_core::models::{Event, EventWrite, Pagination};
use coact_core::AppError;

#[utoipa::path(
    post,
    path = "/api/v1/events",
    tag = "content",
    request_body = EventWrite,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "create_event"))]
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    ValidatedJson(write): ValidatedJson<EventWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    write.validate().map_err(AppError::from)?;

    let event = state.db.events.create(&write).await.map_err(AppError::from)?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "content",
    params(Pagination),
    responses(
        (status = 200, description = "List of events", body = Vec<Event>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_events"))]
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HttpAppError> {
    let events = state.db.events.list(pagination).await.map_err(AppError::from)?;
    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_event"))]
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let event = state
        .db
        .events
        .get(id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
    Ok(Json(event))
}

#[utoipa::path(
    put,
    path = "/api/v1/events/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = EventWrite,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "update_event"))]
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(write): ValidatedJson<EventWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    write.validate().map_err(AppError::from)?;

    let event = state
        .db
        .events
        .update(id, &write)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
    Ok(Json(event))
}

#[utoipa::path(
    delete,
    path = "/api/v1/events/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_event"))]
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.events.delete(id).await.map_err(AppError::from)?;
    if !deleted {
        return Err(HttpAppError::from(AppError::NotFound(
            "Event not found".to_string(),
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
