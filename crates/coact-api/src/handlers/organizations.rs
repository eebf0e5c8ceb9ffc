//! Organization CRUD handlers.
//!
//! Create and update run the organization validation policy before the
//! repository persists anything; list, retrieve and delete never validate.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::handlers::{parse_opt_ref, parse_ref};
use crate::state::AppState;
use coact_core::models::{Organization, OrganizationWrite, Pagination};
use coact_core::AppError;

#[utoipa::path(
    post,
    path = "/api/v1/organizations",
    tag = "organizations",
    request_body = OrganizationWrite,
    responses(
        (status = 201, description = "Organization created", body = Organization),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "create_organization"))]
pub async fn create_organization(
    State(state): State<Arc<AppState>>,
    ValidatedJson(write): ValidatedJson<OrganizationWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    state
        .policies
        .organization
        .validate(&write, state.db.directory.as_ref())
        .await?;

    let topic_id = parse_ref("topic", &write.topic)?;
    let created_by = parse_opt_ref("created_by", write.created_by.as_deref())?;

    let organization = state
        .db
        .organizations
        .create(&write, topic_id, created_by)
        .await
        .map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(organization)))
}

#[utoipa::path(
    get,
    path = "/api/v1/organizations",
    tag = "organizations",
    params(Pagination),
    responses(
        (status = 200, description = "List of organizations", body = Vec<Organization>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_organizations"))]
pub async fn list_organizations(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HttpAppError> {
    let organizations = state
        .db
        .organizations
        .list(pagination)
        .await
        .map_err(AppError::from)?;
    Ok(Json(organizations))
}

#[utoipa::path(
    get,
    path = "/api/v1/organizations/{id}",
    tag = "organizations",
    params(("id" = Uuid, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Organization found", body = Organization),
        (status = 404, description = "Organization not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_organization"))]
pub async fn get_organization(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let organization = state
        .db
        .organizations
        .get(id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))?;
    Ok(Json(organization))
}

#[utoipa::path(
    put,
    path = "/api/v1/organizations/{id}",
    tag = "organizations",
    params(("id" = Uuid, Path, description = "Organization id")),
    request_body = OrganizationWrite,
    responses(
        (status = 200, description = "Organization updated", body = Organization),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Organization not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, write), fields(operation = "update_organization"))]
pub async fn update_organization(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    ValidatedJson(write): ValidatedJson<OrganizationWrite>,
) -> Result<impl IntoResponse, HttpAppError> {
    state
        .policies
        .organization
        .validate(&write, state.db.directory.as_ref())
        .await?;

    let topic_id = parse_ref("topic", &write.topic)?;
    let created_by = parse_opt_ref("created_by", write.created_by.as_deref())?;

    let organization = state
        .db
        .organizations
        .update(id, &write, topic_id, created_by)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))?;

    Ok(Json(organization))
}

#[utoipa::path(
    delete,
    path = "/api/v1/organizations/{id}",
    tag = "organizations",
    params(("id" = Uuid, Path, description = "Organization id")),
    responses(
        (status = 204, description = "Organization deleted"),
        (status = 404, description = "Organization not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_organization"))]
pub async fn delete_organization(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state
        .db
        .organizations
        .delete(id)
        .await
        .map_err(AppError::from)?;

    if !deleted {
        return Err(HttpAppError::from(AppError::NotFound(
            "Organization not found".to_string(),
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
