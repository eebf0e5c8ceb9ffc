use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Subject area used to tag organizations, groups, resources and users.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Topic {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for creating or replacing a topic.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct TopicWrite {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub description: String,
}

fn default_active() -> bool {
    true
}
