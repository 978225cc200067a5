use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{EventStore, StoreError};
use crate::models::event::{Event, EventDraft, EventId};

const SELECT_EVENT: &str = "SELECT id, name, description, begin_at, end_at FROM events";

#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        tracing::info!("Successfully connected to database");

        Ok(Self::new(pool))
    }

    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!().run(&self.pool).await?;

        tracing::info!("Migrations run successfully");

        Ok(())
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn insert(&self, draft: &EventDraft) -> Result<EventId, StoreError> {
        let id = sqlx::query_scalar::<_, EventId>(
            "INSERT INTO events (name, description, begin_at, end_at) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.begin)
        .bind(draft.end)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        let event = sqlx::query_as::<_, Event>(&format!("{SELECT_EVENT} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    async fn list_all(&self) -> Result<Vec<Event>, StoreError> {
        let events = sqlx::query_as::<_, Event>(&format!("{SELECT_EVENT} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(events)
    }

    async fn update(&self, id: EventId, draft: &EventDraft) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE events SET name = $2, description = $3, begin_at = $4, end_at = $5 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.begin)
        .bind(draft.end)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: EventId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
