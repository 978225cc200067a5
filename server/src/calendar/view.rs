//! Client-side rendering state for the month view and the event form.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::calendar::grid::{first_of_month, next_month, prev_month, MonthGrid};
use crate::calendar::time::{local_to_utc, utc_to_local};
use crate::models::event::{Event, EventDraft, EventId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit(EventId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in required fields")]
    MissingName,

    #[error("Please provide Begin value")]
    MissingBegin,

    #[error("Please provide End value")]
    MissingEnd,
}

/// An in-progress new/edit form. Begin and end are local wall-clock values
/// as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub mode: FormMode,
    pub name: String,
    pub description: String,
    pub begin: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl EventForm {
    fn new() -> Self {
        Self {
            mode: FormMode::New,
            name: String::new(),
            description: String::new(),
            begin: None,
            end: None,
        }
    }

    fn edit(event: &Event, offset_minutes: i32) -> Self {
        Self {
            mode: FormMode::Edit(event.id),
            name: event.name.clone(),
            description: event.description.clone(),
            begin: Some(utc_to_local(event.begin, offset_minutes)),
            end: Some(utc_to_local(event.end, offset_minutes)),
        }
    }

    /// Checks required fields and converts begin/end to UTC. Used for both
    /// the create and the update payload.
    pub fn to_draft(&self, offset_minutes: i32) -> Result<EventDraft, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        let begin = self.begin.ok_or(FormError::MissingBegin)?;
        let end = self.end.ok_or(FormError::MissingEnd)?;

        Ok(EventDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            begin: local_to_utc(begin, offset_minutes),
            end: local_to_utc(end, offset_minutes),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CalendarView {
    current: NaiveDate,
    offset_minutes: i32,
    events: Vec<Event>,
    form: Option<EventForm>,
}

impl CalendarView {
    pub fn new(today: NaiveDate, offset_minutes: i32) -> Self {
        Self {
            current: first_of_month(today),
            offset_minutes,
            events: Vec::new(),
            form: None,
        }
    }

    /// First day of the displayed month.
    pub fn current_month(&self) -> NaiveDate {
        self.current
    }

    pub fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    pub fn next_month(&mut self) {
        self.current = next_month(self.current);
    }

    pub fn prev_month(&mut self) {
        self.current = prev_month(self.current);
    }

    /// Replaces the loaded events with a fresh list from the server.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.current, &self.events, self.offset_minutes)
    }

    pub fn form(&self) -> Option<&EventForm> {
        self.form.as_ref()
    }

    pub fn open_new_form(&mut self) -> &mut EventForm {
        self.form.insert(EventForm::new())
    }

    /// Opens the form prefilled from a loaded event. `None` when the id is not
    /// among the loaded events.
    pub fn open_edit_form(&mut self, id: EventId) -> Option<&mut EventForm> {
        let event = self.events.iter().find(|e| e.id == id)?;
        let form = EventForm::edit(event, self.offset_minutes);
        Some(self.form.insert(form))
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn form_draft(&self) -> Option<Result<(FormMode, EventDraft), FormError>> {
        self.form
            .as_ref()
            .map(|form| form.to_draft(self.offset_minutes).map(|draft| (form.mode, draft)))
    }
}
