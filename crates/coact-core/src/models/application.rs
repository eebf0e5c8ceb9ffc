use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Lookup row for application workflow states (pending, accepted, ...).
/// Plain reference data; no cross-entity validation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrganizationApplicationStatus {
    pub id: Uuid,
    pub status_name: String,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for creating or replacing an application status.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct OrganizationApplicationStatusWrite {
    #[validate(length(min = 1, max = 255, message = "status_name must be between 1 and 255 characters"))]
    pub status_name: String,
}

/// A pending request for an organization to join the platform.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrganizationApplication {
    pub id: Uuid,
    #[serde(rename = "status")]
    pub status_id: Uuid,
    pub creation_date: Option<DateTime<Utc>>,
    pub deletion_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for creating or replacing an organization application.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrganizationApplicationWrite {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deletion_date: Option<DateTime<Utc>>,
}
