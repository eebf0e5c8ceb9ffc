use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A working group. Shares the organization's descriptive shape, and
/// additionally records who created it and its activity window
/// (`creation_date`/`deletion_date`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub tagline: String,
    pub social_accounts: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "topic")]
    pub topic_id: Uuid,
    pub flags: Option<i64>,
    pub created_by: Uuid,
    pub creation_date: Option<DateTime<Utc>>,
    pub deletion_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating or replacing a group.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GroupWrite {
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
    pub created_by: String,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deletion_date: Option<DateTime<Utc>>,
}
