//! Generic handlers for all association (join) resources.
//!
//! One handler set serves every relation in the link registration table; the
//! route layer passes in the `&'static LinkSpec` for the resource being hit.
//! Create and update run the relation's validation policy (combined
//! emptiness, then per-field existence) before anything is written.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;
use coact_core::models::{LinkSpec, Pagination};
use coact_core::AppError;

fn policy_for<'a>(
    state: &'a AppState,
    spec: &LinkSpec,
) -> Result<&'a coact_core::validation::LinkPolicy, AppError> {
    state.policies.link(spec.resource).ok_or_else(|| {
        AppError::Internal(format!(
            "No validation policy registered for {}",
            spec.resource
        ))
    })
}

#[tracing::instrument(skip(state, body), fields(resource = %spec.resource, operation = "create_link"))]
pub async fn create_link(
    state: Arc<AppState>,
    spec: &'static LinkSpec,
    ValidatedJson(body): ValidatedJson<Value>,
) -> Result<Response, HttpAppError> {
    let write = spec.parse_payload(&body)?;
    policy_for(&state, spec)?
        .validate(&write, state.db.directory.as_ref())
        .await?;

    let ids = spec.parse_ids(&write)?;
    let row = state
        .db
        .links
        .create(spec, &ids)
        .await
        .map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(spec.row_json(&row))).into_response())
}

#[tracing::instrument(skip(state), fields(resource = %spec.resource, operation = "list_links"))]
pub async fn list_links(
    state: Arc<AppState>,
    spec: &'static LinkSpec,
    pagination: Pagination,
) -> Result<Response, HttpAppError> {
    let rows = state
        .db
        .links
        .list(spec, pagination)
        .await
        .map_err(AppError::from)?;
    let body: Vec<Value> = rows.iter().map(|row| spec.row_json(row)).collect();
    Ok(Json(body).into_response())
}

#[tracing::instrument(skip(state), fields(resource = %spec.resource, operation = "get_link"))]
pub async fn get_link(
    state: Arc<AppState>,
    spec: &'static LinkSpec,
    id: Uuid,
) -> Result<Response, HttpAppError> {
    let row = state
        .db
        .links
        .get(spec, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(format!("{} row not found", spec.resource)))?;
    Ok(Json(spec.row_json(&row)).into_response())
}

#[tracing::instrument(skip(state, body), fields(resource = %spec.resource, operation = "update_link"))]
pub async fn update_link(
    state: Arc<AppState>,
    spec: &'static LinkSpec,
    id: Uuid,
    ValidatedJson(body): ValidatedJson<Value>,
) -> Result<Response, HttpAppError> {
    let write = spec.parse_payload(&body)?;
    policy_for(&state, spec)?
        .validate(&write, state.db.directory.as_ref())
        .await?;

    let ids = spec.parse_ids(&write)?;
    let row = state
        .db
        .links
        .update(spec, id, &ids)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(format!("{} row not found", spec.resource)))?;

    Ok(Json(spec.row_json(&row)).into_response())
}

#[tracing::instrument(skip(state), fields(resource = %spec.resource, operation = "delete_link"))]
pub async fn delete_link(
    state: Arc<AppState>,
    spec: &'static LinkSpec,
    id: Uuid,
) -> Result<Response, HttpAppError> {
    let deleted = state
        .db
        .links
        .delete(spec, id)
        .await
        .map_err(AppError::from)?;

    if !deleted {
        return Err(HttpAppError::from(AppError::NotFound(format!(
            "{} row not found",
            spec.resource
        ))));
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
