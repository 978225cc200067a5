//! Persistence for events, keyed by the store-assigned integer id.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::event::{Event, EventDraft, EventId};

pub mod memory;
pub mod postgres;

pub use memory::MemoryEventStore;
pub use postgres::PgEventStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Durable event storage. Implementations do not enforce the no-overlap rule;
/// callers validate before writing.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persists a new event and returns its freshly assigned id.
    async fn insert(&self, draft: &EventDraft) -> Result<EventId, StoreError>;

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Event>, StoreError>;

    /// Replaces every field except the id. Returns `false` when no event has `id`.
    async fn update(&self, id: EventId, draft: &EventDraft) -> Result<bool, StoreError>;

    /// Returns `false` when no event has `id`.
    async fn delete(&self, id: EventId) -> Result<bool, StoreError>;
}
