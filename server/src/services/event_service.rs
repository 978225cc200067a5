use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::models::event::{Event, EventDraft, EventId, UpdateEventRequest};
use crate::services::validator::{
    check_exists, validate_create, validate_update, ValidationError,
};
use crate::store::EventStore;
use crate::utils::error::AppError;

/// Runs the write-time rules against the current store contents and applies
/// accepted writes.
///
/// Writes hold `write_lock` from the read of the current events until the
/// store call returns, so two requests to the same process cannot both pass
/// the overlap check for colliding slots. Writers in other processes are not
/// covered.
pub struct EventService {
    store: Arc<dyn EventStore>,
    write_lock: Mutex<()>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.store.list_all().await?)
    }

    pub async fn create_event(&self, draft: EventDraft) -> Result<EventId, AppError> {
        draft.validate_fields()?;
        let draft = draft.truncated_to_micros();

        let _guard = self.write_lock.lock().await;
        let existing = self.store.list_all().await?;
        if let Err(reason) = validate_create(&draft, &existing) {
            warn!(%reason, name = %draft.name, "Create rejected");
            return Err(reason.into());
        }

        let id = self.store.insert(&draft).await?;
        info!(event_id = id, begin = %draft.begin, end = %draft.end, "Event created");
        Ok(id)
    }

    /// A missing `id` is reported as not found before the payload is
    /// inspected. A body id, when present, must match `id`.
    pub async fn update_event(
        &self,
        id: EventId,
        request: UpdateEventRequest,
    ) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let existing = self.store.list_all().await?;
        if let Err(reason) = check_exists(id, &existing) {
            warn!(event_id = id, %reason, "Update rejected");
            return Err(reason.into());
        }

        if let Some(body_id) = request.id {
            if body_id != id {
                return Err(AppError::InvalidInput(format!(
                    "Body id '{}' does not match path id '{}'",
                    body_id, id
                )));
            }
        }
        request.draft.validate_fields()?;
        let draft = request.draft.truncated_to_micros();

        if let Err(reason) = validate_update(id, &draft, &existing) {
            warn!(event_id = id, %reason, "Update rejected");
            return Err(reason.into());
        }

        // Deleted by another writer between the read and this call
        if !self.store.update(id, &draft).await? {
            return Err(ValidationError::NotFound(id).into());
        }
        info!(event_id = id, begin = %draft.begin, end = %draft.end, "Event updated");
        Ok(())
    }

    pub async fn delete_event(&self, id: EventId) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        if !self.store.delete(id).await? {
            warn!(event_id = id, "Delete of unknown event");
            return Err(ValidationError::NotFound(id).into());
        }
        info!(event_id = id, "Event deleted");
        Ok(())
    }
}
