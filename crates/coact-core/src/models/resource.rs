use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Shared material (guides, links, documents) that organizations, groups and
/// users can attach to themselves.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Resource {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for creating or replacing a resource.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct ResourceWrite {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "url cannot be empty"))]
    pub url: String,
}
