use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EventStore, StoreError};
use crate::models::event::{Event, EventDraft, EventId};

/// Process-local store used when no database is configured. Ids start at 1
/// and are never reused, even after a delete.
#[derive(Default)]
pub struct MemoryEventStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    last_id: EventId,
    events: BTreeMap<EventId, Event>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn insert(&self, draft: &EventDraft) -> Result<EventId, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.events.insert(id, draft.clone().into_event(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        Ok(self.inner.read().await.events.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.inner.read().await.events.values().cloned().collect())
    }

    async fn update(&self, id: EventId, draft: &EventDraft) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.events.get_mut(&id) {
            Some(event) => {
                *event = draft.clone().into_event(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: EventId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.events.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn draft(name: &str, hour: u32) -> EventDraft {
        EventDraft {
            name: name.to_string(),
            description: String::new(),
            begin: Utc.with_ymd_and_hms(2025, 4, 2, hour, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 4, 2, hour + 1, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryEventStore::new();
        let first = store.insert(&draft("A", 9)).await.unwrap();
        let second = store.insert(&draft("B", 10)).await.unwrap();
        assert_eq!((first, second), (1, 2));

        let events = store.list_all().await.unwrap();
        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryEventStore::new();
        let id = store.insert(&draft("A", 9)).await.unwrap();
        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());

        let next = store.insert(&draft("B", 9)).await.unwrap();
        assert_eq!(next, id + 1);
        assert_eq!(store.find_by_id(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let store = MemoryEventStore::new();
        let id = store.insert(&draft("A", 9)).await.unwrap();

        assert!(store.update(id, &draft("Renamed", 15)).await.unwrap());
        let event = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(event, draft("Renamed", 15).into_event(id));

        assert!(!store.update(42, &draft("Ghost", 9)).await.unwrap());
    }
}
