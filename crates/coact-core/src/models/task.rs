use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A unit of volunteer work that can be assigned within an organization or
/// picked up by an individual user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for creating or replacing a task.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct TaskWrite {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
}
