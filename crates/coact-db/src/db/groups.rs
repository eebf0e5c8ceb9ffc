use anyhow::{Context, Result};
use chrono::Utc;
use coact_core::models::{Group, GroupWrite, Pagination};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "groups", db.operation = "insert"))]
    pub async fn create(
        &self,
        write: &GroupWrite,
        topic_id: Uuid,
        created_by: Uuid,
    ) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups
                (id, name, tagline, social_accounts, location, description,
                 topic_id, flags, created_by, creation_date, deletion_date,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
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
        .bind(write.creation_date)
        .bind(write.deletion_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create group")?;

        Ok(group)
    }

    #[tracing::instrument(skip(self), fields(db.table = "groups", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Group>> {
        let group = sqlx::query_as::<_, Group>("SELECT * FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(group)
    }

    #[tracing::instrument(skip(self), fields(db.table = "groups", db.operation = "select"))]
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            "SELECT * FROM groups ORDER BY created_at ASC LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(groups)
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "groups", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        write: &GroupWrite,
        topic_id: Uuid,
        created_by: Uuid,
    ) -> Result<Option<Group>> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            UPDATE groups
            SET name = $2, tagline = $3, social_accounts = $4, location = $5,
                description = $6, topic_id = $7, flags = $8, created_by = $9,
                creation_date = $10, deletion_date = $11, updated_at = $12
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
        .bind(write.creation_date)
        .bind(write.deletion_date)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update group")?;

        Ok(group)
    }

    #[tracing::instrument(skip(self), fields(db.table = "groups", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
