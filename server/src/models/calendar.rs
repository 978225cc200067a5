use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::grid::{next_month, prev_month, MonthGrid};
use crate::models::event::Event;

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
    /// Client offset in minutes east of UTC.
    #[serde(default)]
    pub offset: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl From<NaiveDate> for MonthRef {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day: u32,
    pub has_event: bool,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGridResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
    pub previous: MonthRef,
    pub next: MonthRef,
}

impl MonthGridResponse {
    pub fn from_grid(reference: NaiveDate, grid: &MonthGrid) -> Self {
        let days = grid
            .days_in_month()
            .iter()
            .map(|&day| CalendarDay {
                day,
                has_event: grid.has_event(day),
                events: grid.events_on_day(day).to_vec(),
            })
            .collect();

        Self {
            year: grid.year(),
            month: grid.month(),
            days,
            previous: prev_month(reference).into(),
            next: next_month(reference).into(),
        }
    }
}
