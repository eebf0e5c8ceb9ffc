//! OpenAPI document.
//!
//! Entity resources are annotated on their handlers. Association resources
//! are registered dynamically from the link table and share one uniform CRUD
//! contract, described in the API description below.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use coact_core::models::{
    Event, EventWrite, Group, GroupWrite, Organization, OrganizationApplication,
    OrganizationApplicationStatus, OrganizationApplicationStatusWrite,
    OrganizationApplicationWrite, OrganizationWrite, Resource, ResourceWrite, Task, TaskWrite,
    Topic, TopicWrite, User, UserWrite,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coact API",
        description = "Community coordination backend: organizations, groups, users, \
content, events, and the association tables that connect them.\n\n\
Association resources (organization_members, organization_resources, \
organization_tasks, organization_topics, organization_events, group_members, \
group_resources, group_topics, group_events, user_resources, user_tasks, \
user_topics, resource_topics) follow one uniform contract under /api/v1: \
POST and GET on the collection, GET/PUT/DELETE on /{id}. Bodies are flat \
maps of the relation's foreign-key fields (e.g. org_id, user_id) as string \
ids. Writes are validated before persistence: empty foreign keys fail with \
a combined invalid_value error, unknown ids fail with not_found."
    ),
    paths(
        handlers::users::create_user,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::update_user,
        handlers::users::delete_user,
        handlers::resources::create_resource,
        handlers::resources::list_resources,
        handlers::resources::get_resource,
        handlers::resources::update_resource,
        handlers::resources::delete_resource,
        handlers::tasks::create_task,
        handlers::tasks::list_tasks,
        handlers::tasks::get_task,
        handlers::tasks::update_task,
        handlers::tasks::delete_task,
        handlers::topics::create_topic,
        handlers::topics::list_topics,
        handlers::topics::get_topic,
        handlers::topics::update_topic,
        handlers::topics::delete_topic,
        handlers::events::create_event,
        handlers::events::list_events,
        handlers::events::get_event,
        handlers::events::update_event,
        handlers::events::delete_event,
        handlers::organizations::create_organization,
        handlers::organizations::list_organizations,
        handlers::organizations::get_organization,
        handlers::organizations::update_organization,
        handlers::organizations::delete_organization,
        handlers::applications::create_application_status,
        handlers::applications::list_application_statuses,
        handlers::applications::get_application_status,
        handlers::applications::update_application_status,
        handlers::applications::delete_application_status,
        handlers::applications::create_application,
        handlers::applications::list_applications,
        handlers::applications::get_application,
        handlers::applications::update_application,
        handlers::applications::delete_application,
        handlers::groups::create_group,
        handlers::groups::list_groups,
        handlers::groups::get_group,
        handlers::groups::update_group,
        handlers::groups::delete_group,
    ),
    components(schemas(
        ErrorResponse,
        User,
        UserWrite,
        Resource,
        ResourceWrite,
        Task,
        TaskWrite,
        Topic,
        TopicWrite,
        Event,
        EventWrite,
        Organization,
        OrganizationWrite,
        Group,
        GroupWrite,
        OrganizationApplicationStatus,
        OrganizationApplicationStatusWrite,
        OrganizationApplication,
        OrganizationApplicationWrite,
    )),
    tags(
        (name = "users", description = "User profiles"),
        (name = "content", description = "Resources, tasks, topics and events"),
        (name = "organizations", description = "Organization management"),
        (name = "organization-applications", description = "Organization onboarding applications"),
        (name = "groups", description = "Working groups"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI document served at /api/openapi.json.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
