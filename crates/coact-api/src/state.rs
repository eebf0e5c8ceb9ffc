//! Application state.
//!
//! One state object aggregates the database pool, the repositories, the
//! entity directory the validation layer reads through, and the
//! validation-policy registry built at startup.

use std::sync::Arc;

use coact_core::{Config, ValidationPolicies};
use coact_db::{
    EventRepository, GroupRepository, LinkRepository, OrganizationApplicationRepository,
    OrganizationApplicationStatusRepository, OrganizationRepository, PgEntityDirectory,
    ResourceRepository, TaskRepository, TopicRepository, UserRepository,
};
use sqlx::PgPool;

/// Database pool and all repositories.
#[derive(Clone)]
pub struct DbState {
    pub pool: PgPool,
    pub users: UserRepository,
    pub resources: ResourceRepository,
    pub tasks: TaskRepository,
    pub topics: TopicRepository,
    pub events: EventRepository,
    pub organizations: OrganizationRepository,
    pub application_statuses: OrganizationApplicationStatusRepository,
    pub applications: OrganizationApplicationRepository,
    pub groups: GroupRepository,
    pub links: LinkRepository,
    pub directory: Arc<PgEntityDirectory>,
}

impl DbState {
    pub fn new(pool: PgPool) -> Self {
        DbState {
            users: UserRepository::new(pool.clone()),
            resources: ResourceRepository::new(pool.clone()),
            tasks: TaskRepository::new(pool.clone()),
            topics: TopicRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            organizations: OrganizationRepository::new(pool.clone()),
            application_statuses: OrganizationApplicationStatusRepository::new(pool.clone()),
            applications: OrganizationApplicationRepository::new(pool.clone()),
            groups: GroupRepository::new(pool.clone()),
            links: LinkRepository::new(pool.clone()),
            directory: Arc::new(PgEntityDirectory::new(pool.clone())),
            pool,
        }
    }
}

/// Main application state.
pub struct AppState {
    pub db: DbState,
    pub policies: ValidationPolicies,
    pub config: Config,
    pub is_production: bool,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        let is_production = config.is_production();
        AppState {
            db: DbState::new(pool),
            policies: ValidationPolicies::standard(),
            config,
            is_production,
        }
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
