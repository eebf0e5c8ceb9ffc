//! Postgres implementation of the validation layer's existence probe.

use async_trait::async_trait;
use coact_core::error::AppError;
use coact_core::validation::{EntityDirectory, EntityKind};
use sqlx::PgPool;
use uuid::Uuid;

fn table_for(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::User => "users",
        EntityKind::Resource => "resources",
        EntityKind::Task => "tasks",
        EntityKind::Topic => "topics",
        EntityKind::Event => "events",
        EntityKind::Organization => "organizations",
        EntityKind::Group => "groups",
    }
}

/// Existence checks as non-transactional point reads. A referenced row can
/// still disappear between this read and the eventual insert; that window is
/// an accepted property of the design, not something this probe closes.
#[derive(Clone)]
pub struct PgEntityDirectory {
    pool: PgPool,
}

impl PgEntityDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityDirectory for PgEntityDirectory {
    #[tracing::instrument(skip(self), fields(db.operation = "exists", entity = %kind))]
    async fn exists(&self, kind: EntityKind, id: &str) -> Result<bool, AppError> {
        // An id that is not a well-formed UUID cannot name a stored row.
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(false);
        };

        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
            table_for(kind)
        );
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(uuid)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(exists)
    }
}
