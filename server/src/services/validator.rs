//! Write-time rules for calendar events.
//!
//! Intervals are half-open, `[begin, end)`, so an event ending at 14:00 and
//! another starting at 14:00 do not collide. Nothing here performs I/O; the
//! caller supplies the current set of stored events and performs the write.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::event::{Event, EventDraft, EventId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Start time must be before end time")]
    InvalidRange,

    #[error("Event with id '{0}' was not found")]
    NotFound(EventId),

    #[error("Event overlaps with existing event '{conflicting_id}'")]
    Overlap { conflicting_id: EventId },
}

pub fn intervals_overlap(
    (b1, e1): (DateTime<Utc>, DateTime<Utc>),
    (b2, e2): (DateTime<Utc>, DateTime<Utc>),
) -> bool {
    b1 < e2 && b2 < e1
}

pub fn validate_create(candidate: &EventDraft, existing: &[Event]) -> Result<(), ValidationError> {
    check_range(candidate)?;
    check_no_overlap(candidate, existing.iter())
}

/// An absent id is reported before anything about the candidate is looked
/// at. The event being replaced is excluded by id, so moving an event within
/// its own current slot is allowed.
pub fn validate_update(
    id: EventId,
    candidate: &EventDraft,
    existing: &[Event],
) -> Result<(), ValidationError> {
    check_exists(id, existing)?;
    check_range(candidate)?;
    check_no_overlap(candidate, existing.iter().filter(|event| event.id != id))
}

pub fn check_exists(id: EventId, existing: &[Event]) -> Result<(), ValidationError> {
    if existing.iter().any(|event| event.id == id) {
        Ok(())
    } else {
        Err(ValidationError::NotFound(id))
    }
}

fn check_range(candidate: &EventDraft) -> Result<(), ValidationError> {
    if candidate.begin < candidate.end {
        Ok(())
    } else {
        Err(ValidationError::InvalidRange)
    }
}

fn check_no_overlap<'a>(
    candidate: &EventDraft,
    mut others: impl Iterator<Item = &'a Event>,
) -> Result<(), ValidationError> {
    let interval = (candidate.begin, candidate.end);
    match others.find(|other| intervals_overlap(interval, (other.begin, other.end))) {
        Some(conflict) => Err(ValidationError::Overlap {
            conflicting_id: conflict.id,
        }),
        None => Ok(()),
    }
}
