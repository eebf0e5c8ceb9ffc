use anyhow::{Context, Result};
use chrono::Utc;
use coact_core::models::{Organization, OrganizationWrite, Pagination};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrganizationRepository {
    pool: PgPool,
}

impl OrganizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a validated organization write. Reference fields arrive already
    /// parsed; the caller has run the validation policy.
    #[tracing::instrument(skip(self, write), fields(db.table = "organizations", db.operation = "insert"))]
    pub async fn create(
        &self,
        write: &OrganizationWrite,
        topic_id: Uuid,
        created_by: Option<Uuid>,
    ) -> Result<Organization> {
        let organization = sqlx::query_as::<_, Organization>(
            r#"
            INSERT INTO organizations
                (id, name, tagline, social_accounts, location, description,
                 topic_id, flags, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&write.name)
        .bind(&write.tagline)
        .bind(&write.social_accounts)
        .bind(&write.location)
        .bind(&write.description)
        .bind(topic_id)
        .bind(write.flags)
        .bind(created_by)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create organization")?;

        Ok(organization)
    }

    #[tracing::instrument(skip(self), fields(db.table = "organizations", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Organization>> {
        let organization =
            sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(organization)
    }

    #[tracing::instrument(skip(self), fields(db.table = "organizations", db.operation = "select"))]
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<Organization>> {
        let organizations = sqlx::query_as::<_, Organization>(
            "SELECT * FROM organizations ORDER BY created_at ASC LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(organizations)
    }

    /// Full replace; returns None when the row does not exist.
    #[tracing::instrument(skip(self, write), fields(db.table = "organizations", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        write: &OrganizationWrite,
        topic_id: Uuid,
        created_by: Option<Uuid>,
    ) -> Result<Option<Organization>> {
        let organization = sqlx::query_as::<_, Organization>(
            r#"
            UPDATE organizations
            SET name = $2, tagline = $3, social_accounts = $4, location = $5,
                description = $6, topic_id = $7, flags = $8, created_by = $9,
                updated_at = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&write.name)
        .bind(&write.tagline)
        .bind(&write.social_accounts)
        .bind(&write.location)
        .bind(&write.description)
        .bind(topic_id)
        .bind(write.flags)
        .bind(created_by)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update organization")?;

        Ok(organization)
    }

    #[tracing::instrument(skip(self), fields(db.table = "organizations", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
