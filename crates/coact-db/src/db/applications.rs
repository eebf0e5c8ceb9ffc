use anyhow::{Context, Result};
use chrono::Utc;
use coact_core::models::{
    OrganizationApplication, OrganizationApplicationStatus, OrganizationApplicationStatusWrite,
    OrganizationApplicationWrite, Pagination,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Lookup table of application workflow states.
#[derive(Clone)]
pub struct OrganizationApplicationStatusRepository {
    pool: PgPool,
}

impl OrganizationApplicationStatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "organization_application_statuses", db.operation = "insert"))]
    pub async fn create(
        &self,
        write: &OrganizationApplicationStatusWrite,
    ) -> Result<OrganizationApplicationStatus> {
        let status = sqlx::query_as::<_, OrganizationApplicationStatus>(
            r#"
            INSERT INTO organization_application_statuses (id, status_name, created_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&write.status_name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create application status")?;
        Ok(status)
    }

    #[tracing::instrument(skip(self), fields(db.table = "organization_application_statuses", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<OrganizationApplicationStatus>> {
        let status = sqlx::query_as::<_, OrganizationApplicationStatus>(
            "SELECT * FROM organization_application_statuses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(status)
    }

    #[tracing::instrument(skip(self), fields(db.table = "organization_application_statuses", db.operation = "select"))]
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<OrganizationApplicationStatus>> {
        let statuses = sqlx::query_as::<_, OrganizationApplicationStatus>(
            "SELECT * FROM organization_application_statuses ORDER BY created_at ASC LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(statuses)
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "organization_application_statuses", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        write: &OrganizationApplicationStatusWrite,
    ) -> Result<Option<OrganizationApplicationStatus>> {
        let status = sqlx::query_as::<_, OrganizationApplicationStatus>(
            "UPDATE organization_application_statuses SET status_name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&write.status_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(status)
    }

    #[tracing::instrument(skip(self), fields(db.table = "organization_application_statuses", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM organization_application_statuses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct OrganizationApplicationRepository {
    pool: PgPool,
}

impl OrganizationApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "organization_applications", db.operation = "insert"))]
    pub async fn create(
        &self,
        write: &OrganizationApplicationWrite,
        status_id: Uuid,
    ) -> Result<OrganizationApplication> {
        let application = sqlx::query_as::<_, OrganizationApplication>(
            r#"
            INSERT INTO organization_applications
                (id, status_id, creation_date, deletion_date, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(status_id)
        .bind(write.creation_date)
        .bind(write.deletion_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create organization application")?;
        Ok(application)
    }

    #[tracing::instrument(skip(self), fields(db.table = "organization_applications", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<OrganizationApplication>> {
        let application = sqlx::query_as::<_, OrganizationApplication>(
            "SELECT * FROM organization_applications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(application)
    }

    #[tracing::instrument(skip(self), fields(db.table = "organization_applications", db.operation = "select"))]
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<OrganizationApplication>> {
        let applications = sqlx::query_as::<_, OrganizationApplication>(
            "SELECT * FROM organization_applications ORDER BY created_at ASC LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "organization_applications", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        write: &OrganizationApplicationWrite,
        status_id: Uuid,
    ) -> Result<Option<OrganizationApplication>> {
        let application = sqlx::query_as::<_, OrganizationApplication>(
            r#"
            UPDATE organization_applications
            SET status_id = $2, creation_date = $3, deletion_date = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status_id)
        .bind(write.creation_date)
        .bind(write.deletion_date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(application)
    }

    #[tracing::instrument(skip(self), fields(db.table = "organization_applications", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM organization_applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
