//! Shared repository for all association (join) tables.
//!
//! SQL is assembled from [`LinkSpec`] metadata: table and column names come
//! from the static registration table, never from request input, so the
//! formatted statements stay injection-free while the values are bound.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use coact_core::models::{LinkRow, LinkSpec, Pagination};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct LinkRepository {
    pool: PgPool,
}

impl LinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn columns(spec: &LinkSpec) -> String {
        spec.refs
            .iter()
            .map(|f| f.column)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn row_from(spec: &LinkSpec, row: &PgRow) -> Result<LinkRow> {
        let id: Uuid = row.try_get("id")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        let values = spec
            .refs
            .iter()
            .map(|f| row.try_get::<Uuid, _>(f.column))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LinkRow {
            id,
            values,
            created_at,
        })
    }

    /// Insert a validated association row. `ids` parallels the link's
    /// declared field order.
    #[tracing::instrument(skip(self, ids), fields(db.table = %spec.table, db.operation = "insert"))]
    pub async fn create(&self, spec: &LinkSpec, ids: &[Uuid]) -> Result<LinkRow> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();

        let placeholders: Vec<String> = (2..2 + ids.len()).map(|i| format!("${}", i)).collect();
        let sql = format!(
            "INSERT INTO {} (id, {}, created_at) VALUES ($1, {}, ${})",
            spec.table,
            Self::columns(spec),
            placeholders.join(", "),
            ids.len() + 2,
        );

        let mut query = sqlx::query(&sql).bind(id);
        for foreign_key in ids {
            query = query.bind(foreign_key);
        }
        query
            .bind(created_at)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to insert {} row", spec.table))?;

        Ok(LinkRow {
            id,
            values: ids.to_vec(),
            created_at,
        })
    }

    #[tracing::instrument(skip(self), fields(db.table = %spec.table, db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, spec: &LinkSpec, id: Uuid) -> Result<Option<LinkRow>> {
        let sql = format!(
            "SELECT id, {}, created_at FROM {} WHERE id = $1",
            Self::columns(spec),
            spec.table,
        );
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(|r| Self::row_from(spec, &r)).transpose()
    }

    #[tracing::instrument(skip(self), fields(db.table = %spec.table, db.operation = "select"))]
    pub async fn list(&self, spec: &LinkSpec, pagination: Pagination) -> Result<Vec<LinkRow>> {
        let sql = format!(
            "SELECT id, {}, created_at FROM {} ORDER BY created_at ASC LIMIT $1 OFFSET $2",
            Self::columns(spec),
            spec.table,
        );
        let rows = sqlx::query(&sql)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(|r| Self::row_from(spec, r)).collect()
    }

    /// Full replace of the foreign keys; returns None when the row does not
    /// exist.
    #[tracing::instrument(skip(self, ids), fields(db.table = %spec.table, db.operation = "update", db.record_id = %id))]
    pub async fn update(&self, spec: &LinkSpec, id: Uuid, ids: &[Uuid]) -> Result<Option<LinkRow>> {
        let sets: Vec<String> = spec
            .refs
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{} = ${}", f.column, i + 2))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE id = $1 RETURNING id, {}, created_at",
            spec.table,
            sets.join(", "),
            Self::columns(spec),
        );

        let mut query = sqlx::query(&sql).bind(id);
        for foreign_key in ids {
            query = query.bind(foreign_key);
        }
        let row = query
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to update {} row", spec.table))?;
        row.map(|r| Self::row_from(spec, &r)).transpose()
    }

    #[tracing::instrument(skip(self), fields(db.table = %spec.table, db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, spec: &LinkSpec, id: Uuid) -> Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", spec.table);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
