//! Referential existence checks.
//!
//! Entity types that can be referenced by a foreign key form a closed set,
//! dispatched through the [`EntityDirectory`] capability rather than any
//! reflective lookup. The check is a single point read per call: no caching,
//! no batching, and no transactional guarantee against a concurrent delete.

use std::fmt;

use async_trait::async_trait;

use crate::error::AppError;

/// The closed set of entity types a foreign key may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Resource,
    Task,
    Topic,
    Event,
    Organization,
    Group,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Resource => "Resource",
            EntityKind::Task => "Task",
            EntityKind::Topic => "Topic",
            EntityKind::Event => "Event",
            EntityKind::Organization => "Organization",
            EntityKind::Group => "Group",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability interface over the entity store: can a row of `kind` with this
/// id be found right now? Implemented by the database layer and by in-memory
/// doubles in tests.
///
/// `id` is the raw wire value. An id that cannot name a stored row (empty,
/// malformed) simply does not exist; implementations must not treat it as a
/// separate error path.
#[async_trait]
pub trait EntityDirectory: Send + Sync {
    async fn exists(&self, kind: EntityKind, id: &str) -> Result<bool, AppError>;
}

/// Confirm that a row of `kind` with identifier `id` exists, failing with a
/// missing-reference error otherwise. Succeeds silently on existence.
pub async fn validate_object_existence(
    directory: &dyn EntityDirectory,
    kind: EntityKind,
    id: &str,
) -> Result<(), AppError> {
    if !id.is_empty() && directory.exists(kind, id).await? {
        return Ok(());
    }
    Err(AppError::MissingReference {
        entity: kind.as_str(),
        id: id.to_string(),
    })
}
