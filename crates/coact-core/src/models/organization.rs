use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// An organization: the top-level coordination entity. Every descriptive field
/// is required at validation time; `flags` is an application bit mask and
/// `created_by` references the founding user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub tagline: String,
    pub social_accounts: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "topic")]
    pub topic_id: Uuid,
    pub flags: Option<i64>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating or replacing an organization.
///
/// String fields default to empty so a missing key fails field validation with
/// the same error an explicit `""` would, instead of a deserialization error.
/// References arrive as plain id strings, never nested objects.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrganizationWrite {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub social_accounts: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub flags: Option<i64>,
    #[serde(default)]
    pub created_by: Option<String>,
}
