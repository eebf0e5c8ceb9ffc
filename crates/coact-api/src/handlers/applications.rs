//! Organization application and application-status handlers.
//!
//! Statuses are plain lookup rows; applications run the application
//! validation policy (status presence, date ordering) before persisting.

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
use crate::handlers::parse_ref;
use crate::state::AppState;
use coact_core::models::{
    OrganizationApplication, OrganizationApplicationStatus, OrganizationApplicationStatusWrite,
    OrganizationApplicationWrite, Pagination,
};
use coact_core::AppError;

#[utoipa::path(
    post,
    path = "/api/v1/organization_application_statuses",
    tag = "organization-applications",
    request_body = OrganizationApplicationStatusWrite,
    responses(
        (status = 201, description = "Status created", body = OrganizationApplicationStatus),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "create_application_status"))]
pub async fn create_application_status(
    State(state): State<Arc<AppState>>,
    ValidatedJson(write): ValidatedJson<OrganizationApplicationStatusWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    write.validate().map_err(AppError::from)?;

    let status = state
        .db
        .application_statuses
        .create(&write)
        .await
        .map_err(AppError::from)?;
    Ok((StatusCode::CREATED, Json(status)))
}

#[utoipa::path(
    get,
    path = "/api/v1/organization_application_statuses",
    tag = "organization-applications",
    params(Pagination),
    responses(
        (status = 200, description = "List of statuses", body = Vec<OrganizationApplicationStatus>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_application_statuses"))]
pub async fn list_application_statuses(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HttpAppError> {
    let statuses = state
        .db
        .application_statuses
        .list(pagination)
        .await
        .map_err(AppError::from)?;
    Ok(Json(statuses))
}

#[utoipa::path(
    get,
    path = "/api/v1/organization_application_statuses/{id}",
    tag = "organization-applications",
    params(("id" = Uuid, Path, description = "Status id")),
    responses(
        (status = 200, description = "Status found", body = OrganizationApplicationStatus),
        (status = 404, description = "Status not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_application_status"))]
pub async fn get_application_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let status = state
        .db
        .application_statuses
        .get(id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Application status not found".to_string()))?;
    Ok(Json(status))
}

#[utoipa::path(
    put,
    path = "/api/v1/organization_application_statuses/{id}",
    tag = "organization-applications",
    params(("id" = Uuid, Path, description = "Status id")),
    request_body = OrganizationApplicationStatusWrite,
    responses(
        (status = 200, description = "Status updated", body = OrganizationApplicationStatus),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Status not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "update_application_status"))]
pub async fn update_application_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(write): ValidatedJson<OrganizationApplicationStatusWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    write.validate().map_err(AppError::from)?;

    let status = state
        .db
        .application_statuses
        .update(id, &write)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Application status not found".to_string()))?;
    Ok(Json(status))
}

#[utoipa::path(
    delete,
    path = "/api/v1/organization_application_statuses/{id}",
    tag = "organization-applications",
    params(("id" = Uuid, Path, description = "Status id")),
    responses(
        (status = 204, description = "Status deleted"),
        (status = 404, description = "Status not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_application_status"))]
pub async fn delete_application_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state
        .db
        .application_statuses
        .delete(id)
        .await
        .map_err(AppError::from)?;
    if !deleted {
        return Err(HttpAppError::from(AppError::NotFound(
            "Application status not found".to_string(),
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/organization_applications",
    tag = "organization-applications",
    request_body = OrganizationApplicationWrite,
    responses(
        (status = 201, description = "Application created", body = OrganizationApplication),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "create_application"))]
pub async fn create_application(
    State(state): State<Arc<AppState>>,
    ValidatedJson(write): ValidatedJson<OrganizationApplicationWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    state
        .policies
        .organization_application
        .validate(&write, state.db.directory.as_ref())
        .await?;

    let status_id = parse_ref("status", &write.status)?;

    let application = state
        .db
        .applications
        .create(&write, status_id)
        .await
        .map_err(AppError::from)?;
    Ok((StatusCode::CREATED, Json(application)))
}

#[utoipa::path(
    get,
    path = "/api/v1/organization_applications",
    tag = "organization-applications",
    params(Pagination),
    responses(
        (status = 200, description = "List of applications", body = Vec<OrganizationApplication>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_applications"))]
pub async fn list_applications(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HttpAppError> {
    let applications = state
        .db
        .applications
        .list(pagination)
        .await
        .map_err(AppError::from)?;
    Ok(Json(applications))
}

#[utoipa::path(
    get,
    path = "/api/v1/organization_applications/{id}",
    tag = "organization-applications",
    params(("id" = Uuid, Path, description = "Application id")),
    responses(
        (status = 200, description = "Application found", body = OrganizationApplication),
        (status = 404, description = "Application not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_application"))]
pub async fn get_application(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let application = state
        .db
        .applications
        .get(id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Organization application not found".to_string()))?;
    Ok(Json(application))
}

#[utoipa::path(
    put,
    path = "/api/v1/organization_applications/{id}",
    tag = "organization-applications",
    params(("id" = Uuid, Path, description = "Application id")),
    request_body = OrganizationApplicationWrite,
    responses(
        (status = 200, description = "Application updated", body = OrganizationApplication),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Application not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "update_application"))]
pub async fn update_application(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(write): ValidatedJson<OrganizationApplicationWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    state
        .policies
        .organization_application
        .validate(&write, state.db.directory.as_ref())
        .await?;

    let status_id = parse_ref("status", &write.status)?;

    let application = state
        .db
        .applications
        .update(id, &write, status_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Organization application not found".to_string()))?;
    Ok(Json(application))
}

#[utoipa::path(
    delete,
    path = "/api/v1/organization_applications/{id}",
    tag = "organization-applications",
    params(("id" = Uuid, Path, description = "Application id")),
    responses(
        (status = 204, description = "Application deleted"),
        (status = 404, description = "Application not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_application"))]
pub async fn delete_application(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.applications.delete(id).await.map_err(AppError::from)?;
    if !deleted {
        return Err(HttpAppError::from(AppError::NotFound(
            "Organization application not found".to_string(),
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
