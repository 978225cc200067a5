use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

pub type EventId = i32;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// A stored calendar event. `begin` and `end` are UTC instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    #[sqlx(rename = "begin_at")]
    pub begin: DateTime<Utc>,
    #[sqlx(rename = "end_at")]
    pub end: DateTime<Utc>,
}

/// Everything about an event except its id: the payload of an insert or of
/// a wholesale replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    EmptyName,

    #[error("Name must be at most 100 characters (got {0})")]
    NameTooLong(usize),

    #[error("Description must be at most 500 characters (got {0})")]
    DescriptionTooLong(usize),
}

impl EventDraft {
    pub fn validate_fields(&self) -> Result<(), FieldError> {
        if self.name.trim().is_empty() {
            return Err(FieldError::EmptyName);
        }
        let name_len = self.name.chars().count();
        if name_len > NAME_MAX_CHARS {
            return Err(FieldError::NameTooLong(name_len));
        }
        let description_len = self.description.chars().count();
        if description_len > DESCRIPTION_MAX_CHARS {
            return Err(FieldError::DescriptionTooLong(description_len));
        }
        Ok(())
    }

    /// Drops sub-microsecond precision, which Postgres `TIMESTAMPTZ` cannot
    /// hold, so every store sees the instants that get validated.
    pub fn truncated_to_micros(self) -> Self {
        Self {
            begin: self.begin.trunc_subsecs(6),
            end: self.end.trunc_subsecs(6),
            ..self
        }
    }

    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            name: self.name,
            description: self.description,
            begin: self.begin,
            end: self.end,
        }
    }
}

pub type CreateEventRequest = EventDraft;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub id: Option<EventId>,
    #[serde(flatten)]
    pub draft: EventDraft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub id: EventId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetEventsResponse {
    pub events: Vec<Event>,
}
