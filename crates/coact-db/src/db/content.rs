//! Repositories for the passive record entities: users, resources, tasks,
//! topics and events. These rows carry no cross-entity validation; they are
//! what the association layer's existence checks resolve against.

use anyhow::{Context, Result};
use chrono::Utc;
use coact_core::models::{
    Event, EventWrite, Pagination, Resource, ResourceWrite, Task, TaskWrite, Topic, TopicWrite,
    User, UserWrite,
};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "users", db.operation = "insert"))]
    pub async fn create(&self, write: &UserWrite) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, name, location, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&write.username)
        .bind(&write.name)
        .bind(&write.location)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create user")?;
        Ok(user)
    }

    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "select"))]
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<User>> {
        let users =
            sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at ASC LIMIT $1 OFFSET $2")
                .bind(pagination.limit())
                .bind(pagination.offset())
                .fetch_all(&self.pool)
                .await?;
        Ok(users)
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "users", db.operation = "update", db.record_id = %id))]
    pub async fn update(&self, id: Uuid, write: &UserWrite) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET username = $2, name = $3, location = $4 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&write.username)
        .bind(&write.name)
        .bind(&write.location)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct ResourceRepository {
    pool: PgPool,
}

impl ResourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "resources", db.operation = "insert"))]
    pub async fn create(&self, write: &ResourceWrite) -> Result<Resource> {
        let resource = sqlx::query_as::<_, Resource>(
            "INSERT INTO resources (id, name, description, url, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&write.name)
        .bind(&write.description)
        .bind(&write.url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create resource")?;
        Ok(resource)
    }

    #[tracing::instrument(skip(self), fields(db.table = "resources", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Resource>> {
        let resource = sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(resource)
    }

    #[tracing::instrument(skip(self), fields(db.table = "resources", db.operation = "select"))]
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<Resource>> {
        let resources = sqlx::query_as::<_, Resource>(
            "SELECT * FROM resources ORDER BY created_at ASC LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(resources)
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "resources", db.operation = "update", db.record_id = %id))]
    pub async fn update(&self, id: Uuid, write: &ResourceWrite) -> Result<Option<Resource>> {
        let resource = sqlx::query_as::<_, Resource>(
            "UPDATE resources SET name = $2, description = $3, url = $4 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&write.name)
        .bind(&write.description)
        .bind(&write.url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(resource)
    }

    #[tracing::instrument(skip(self), fields(db.table = "resources", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "tasks", db.operation = "insert"))]
    pub async fn create(&self, write: &TaskWrite) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, name, description, location, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&write.name)
        .bind(&write.description)
        .bind(&write.location)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create task")?;
        Ok(task)
    }

    #[tracing::instrument(skip(self), fields(db.table = "tasks", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    #[tracing::instrument(skip(self), fields(db.table = "tasks", db.operation = "select"))]
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<Task>> {
        let tasks =
            sqlx::query_as::<_, Task>("SELECT * FROM tasks ORDER BY created_at ASC LIMIT $1 OFFSET $2")
                .bind(pagination.limit())
                .bind(pagination.offset())
                .fetch_all(&self.pool)
                .await?;
        Ok(tasks)
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "tasks", db.operation = "update", db.record_id = %id))]
    pub async fn update(&self, id: Uuid, write: &TaskWrite) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET name = $2, description = $3, location = $4 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&write.name)
        .bind(&write.description)
        .bind(&write.location)
        .fetch_optional(&self.pool)
        .await?;
        Ok(task)
    }

    #[tracing::instrument(skip(self), fields(db.table = "tasks", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct TopicRepository {
    pool: PgPool,
}

impl TopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "topics", db.operation = "insert"))]
    pub async fn create(&self, write: &TopicWrite) -> Result<Topic> {
        let topic = sqlx::query_as::<_, Topic>(
            "INSERT INTO topics (id, name, active, description, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&write.name)
        .bind(write.active)
        .bind(&write.description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create topic")?;
        Ok(topic)
    }

    #[tracing::instrument(skip(self), fields(db.table = "topics", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Topic>> {
        let topic = sqlx::query_as::<_, Topic>("SELECT * FROM topics WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(topic)
    }

    #[tracing::instrument(skip(self), fields(db.table = "topics", db.operation = "select"))]
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<Topic>> {
        let topics =
            sqlx::query_as::<_, Topic>("SELECT * FROM topics ORDER BY created_at ASC LIMIT $1 OFFSET $2")
                .bind(pagination.limit())
                .bind(pagination.offset())
                .fetch_all(&self.pool)
                .await?;
        Ok(topics)
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "topics", db.operation = "update", db.record_id = %id))]
    pub async fn update(&self, id: Uuid, write: &TopicWrite) -> Result<Option<Topic>> {
        let topic = sqlx::query_as::<_, Topic>(
            "UPDATE topics SET name = $2, active = $3, description = $4 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&write.name)
        .bind(write.active)
        .bind(&write.description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(topic)
    }

    #[tracing::instrument(skip(self), fields(db.table = "topics", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "events", db.operation = "insert"))]
    pub async fn create(&self, write: &EventWrite) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            "INSERT INTO events (id, name, description, location, start_time, end_time, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&write.name)
        .bind(&write.description)
        .bind(&write.location)
        .bind(write.start_time)
        .bind(write.end_time)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create event")?;
        Ok(event)
    }

    #[tracing::instrument(skip(self), fields(db.table = "events", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(event)
    }

    #[tracing::instrument(skip(self), fields(db.table = "events", db.operation = "select"))]
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<Event>> {
        let events =
            sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY created_at ASC LIMIT $1 OFFSET $2")
                .bind(pagination.limit())
                .bind(pagination.offset())
                .fetch_all(&self.pool)
                .await?;
        Ok(events)
    }

    #[tracing::instrument(skip(self, write), fields(db.table = "events", db.operation = "update", db.record_id = %id))]
    pub async fn update(&self, id: Uuid, write: &EventWrite) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            "UPDATE events SET name = $2, description = $3, location = $4, \
             start_time = $5, end_time = $6 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&write.name)
        .bind(&write.description)
        .bind(&write.location)
        .bind(write.start_time)
        .bind(write.end_time)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    #[tracing::instrument(skip(self), fields(db.table = "events", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
