//! Domain route groups (users, content, organizations, groups, associations).

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::Router;
use serde_json::Value;
use uuid::Uuid;

use crate::constants::API_PREFIX;
use crate::error::ValidatedJson;
use crate::handlers;
use crate::state::AppState;
use coact_core::models::{link_specs, Pagination};

pub fn user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/users", API_PREFIX),
            post(handlers::users::create_user).get(handlers::users::list_users),
        )
        .route(
            &format!("{}/users/{{id}}", API_PREFIX),
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        .with_state(state)
}

pub fn content_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/resources", API_PREFIX),
            post(handlers::resources::create_resource).get(handlers::resources::list_resources),
        )
        .route(
            &format!("{}/resources/{{id}}", API_PREFIX),
            get(handlers::resources::get_resource)
                .put(handlers::resources::update_resource)
                .delete(handlers::resources::delete_resource),
        )
        .route(
            &format!("{}/tasks", API_PREFIX),
            post(handlers::tasks::create_task).get(handlers::tasks::list_tasks),
        )
        .route(
            &format!("{}/tasks/{{id}}", API_PREFIX),
            get(handlers::tasks::get_task)
                .put(handlers::tasks::update_task)
                .delete(handlers::tasks::delete_task),
        )
        .route(
            &format!("{}/topics", API_PREFIX),
            post(handlers::topics::create_topic).get(handlers::topics::list_topics),
        )
        .route(
            &format!("{}/topics/{{id}}", API_PREFIX),
            get(handlers::topics::get_topic)
                .put(handlers::topics::update_topic)
                .delete(handlers::topics::delete_topic),
        )
        .route(
            &format!("{}/events", API_PREFIX),
            post(handlers::events::create_event).get(handlers::events::list_events),
        )
        .route(
            &format!("{}/events/{{id}}", API_PREFIX),
            get(handlers::events::get_event)
                .put(handlers::events::update_event)
                .delete(handlers::events::delete_event),
        )
        .with_state(state)
}

pub fn organization_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/organizations", API_PREFIX),
            post(handlers::organizations::create_organization)
                .get(handlers::organizations::list_organizations),
        )
        .route(
            &format!("{}/organizations/{{id}}", API_PREFIX),
            get(handlers::organizations::get_organization)
                .put(handlers::organizations::update_organization)
                .delete(handlers::organizations::delete_organization),
        )
        .with_state(state)
}

pub fn application_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/organization_application_statuses", API_PREFIX),
            post(handlers::applications::create_application_status)
                .get(handlers::applications::list_application_statuses),
        )
        .route(
            &format!("{}/organization_application_statuses/{{id}}", API_PREFIX),
            get(handlers::applications::get_application_status)
                .put(handlers::applications::update_application_status)
                .delete(handlers::applications::delete_application_status),
        )
        .route(
            &format!("{}/organization_applications", API_PREFIX),
            post(handlers::applications::create_application)
                .get(handlers::applications::list_applications),
        )
        .route(
            &format!("{}/organization_applications/{{id}}", API_PREFIX),
            get(handlers::applications::get_application)
                .put(handlers::applications::update_application)
                .delete(handlers::applications::delete_application),
        )
        .with_state(state)
}

pub fn group_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/groups", API_PREFIX),
            post(handlers::groups::create_group).get(handlers::groups::list_groups),
        )
        .route(
            &format!("{}/groups/{{id}}", API_PREFIX),
            get(handlers::groups::get_group)
                .put(handlers::groups::update_group)
                .delete(handlers::groups::delete_group),
        )
        .with_state(state)
}

/// Association resources, registered from the link table. Adding a relation
/// to [`link_specs`] exposes it here without any further route code.
pub fn link_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let mut router = Router::new();
    for spec in link_specs() {
        let collection = format!("{}/{}", API_PREFIX, spec.resource);
        let member = format!("{}/{{id}}", collection);
        router = router
            .route(
                &collection,
                post(
                    move |State(state): State<Arc<AppState>>, body: ValidatedJson<Value>| {
                        handlers::links::create_link(state, spec, body)
                    },
                )
                .get(
                    move |State(state): State<Arc<AppState>>,
                          Query(pagination): Query<Pagination>| {
                        handlers::links::list_links(state, spec, pagination)
                    },
                ),
            )
            .route(
                &member,
                get(
                    move |State(state): State<Arc<AppState>>, Path(id): Path<Uuid>| {
                        handlers::links::get_link(state, spec, id)
                    },
                )
                .put(
                    move |State(state): State<Arc<AppState>>,
                          Path(id): Path<Uuid>,
                          body: ValidatedJson<Value>| {
                        handlers::links::update_link(state, spec, id, body)
                    },
                )
                .delete(
                    move |State(state): State<Arc<AppState>>, Path(id): Path<Uuid>| {
                        handlers::links::delete_link(state, spec, id)
                    },
                ),
            );
    }
    router.with_state(state)
}
