use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Platform member. Account credentials and sessions live in the external
/// authentication service; this row is the profile the rest of the schema
/// references.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for creating or replacing a user.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UserWrite {
    #[validate(length(min = 1, max = 255, message = "username must be between 1 and 255 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
}
