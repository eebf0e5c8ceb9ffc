//! Coact database layer
//!
//! sqlx/Postgres repositories for every entity and association table, plus the
//! [`PgEntityDirectory`] existence probe the validation layer dispatches
//! through.

pub mod db;

pub use db::{
    EventRepository, GroupRepository, LinkRepository, OrganizationApplicationRepository,
    OrganizationApplicationStatusRepository, OrganizationRepository, PgEntityDirectory,
    ResourceRepository, TaskRepository, TopicRepository, UserRepository,
};
