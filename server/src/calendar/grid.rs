//! Month view computation: the day numbers of a month and the events that
//! start on each of them.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::calendar::time::utc_to_local;
use crate::models::event::Event;

/// Gregorian rule: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// `None` when `month` is outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// First day of the month after `date`'s month. Saturates at the last
/// month chrono can represent.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

/// First day of the month before `date`'s month. Saturates at the first
/// month chrono can represent.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    days: Vec<u32>,
    by_day: BTreeMap<u32, Vec<Event>>,
}

impl MonthGrid {
    /// Builds the grid for `reference`'s month. An event is placed on the
    /// local day its `begin` falls on; `end` is ignored, so an event running
    /// past midnight appears only on its first day.
    pub fn build(reference: NaiveDate, events: &[Event], offset_minutes: i32) -> Self {
        let year = reference.year();
        let month = reference.month();
        // chrono months are always 1..=12
        let days = (1..=days_in_month(year, month).unwrap_or_default()).collect();

        let mut by_day: BTreeMap<u32, Vec<Event>> = BTreeMap::new();
        for event in events {
            let begin = utc_to_local(event.begin, offset_minutes);
            if begin.year() == year && begin.month() == month {
                by_day.entry(begin.day()).or_default().push(event.clone());
            }
        }
        for day_events in by_day.values_mut() {
            day_events.sort_by_key(|e| (e.begin, e.id));
        }

        Self {
            year,
            month,
            days,
            by_day,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> &[u32] {
        &self.days
    }

    pub fn events_on_day(&self, day: u32) -> &[Event] {
        self.by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_event(&self, day: u32) -> bool {
        !self.events_on_day(day).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event(id: i32, y: i32, m: u32, d: u32, hour: u32, hours_long: i64) -> Event {
        let begin = Utc.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap();
        Event {
            id,
            name: format!("Event {id}"),
            description: String::new(),
            begin,
            end: begin + Duration::hours(hours_long),
        }
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_february_lengths() {
        let leap = MonthGrid::build(date(2024, 2, 10), &[], 0);
        assert_eq!(leap.days_in_month().len(), 29);
        assert_eq!(leap.days_in_month().first(), Some(&1));
        assert_eq!(leap.days_in_month().last(), Some(&29));

        let common = MonthGrid::build(date(2025, 2, 10), &[], 0);
        assert_eq!(common.days_in_month().len(), 28);
    }

    #[test]
    fn test_month_lengths_for_whole_year() {
        let lengths: Vec<u32> = (1..=12).filter_map(|m| days_in_month(2025, m)).collect();
        assert_eq!(lengths, [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn test_days_in_month_rejects_invalid_month() {
        assert_eq!(days_in_month(2025, 0), None);
        assert_eq!(days_in_month(2025, 13), None);
        assert_eq!(days_in_month(2024, 2), Some(29));
    }

    #[test]
    fn test_navigation_crosses_year_boundaries() {
        assert_eq!(next_month(date(2024, 12, 25)), date(2025, 1, 1));
        assert_eq!(prev_month(date(2025, 1, 31)), date(2024, 12, 1));
        assert_eq!(next_month(date(2025, 1, 31)), date(2025, 2, 1));
        assert_eq!(prev_month(date(2024, 3, 31)), date(2024, 2, 1));
    }

    #[test]
    fn test_events_grouped_by_begin_day() {
        let events = vec![
            event(1, 2025, 4, 2, 13, 1),
            event(2, 2025, 4, 2, 9, 1),
            event(3, 2025, 4, 15, 8, 2),
            event(4, 2025, 5, 2, 13, 1),
            event(5, 2024, 4, 2, 13, 1),
        ];
        let grid = MonthGrid::build(date(2025, 4, 20), &events, 0);

        let ids: Vec<i32> = grid.events_on_day(2).iter().map(|e| e.id).collect();
        assert_eq!(ids, [2, 1]);
        assert!(grid.has_event(15));
        assert!(!grid.has_event(3));
        assert!(grid.events_on_day(31).is_empty());
    }

    #[test]
    fn test_event_spanning_midnight_counts_on_start_day_only() {
        let events = vec![event(1, 2025, 4, 2, 22, 4)];
        let grid = MonthGrid::build(date(2025, 4, 1), &events, 0);
        assert!(grid.has_event(2));
        assert!(!grid.has_event(3));
    }

    #[test]
    fn test_local_offset_shifts_day_and_month() {
        // 23:30 UTC on April 30 is May 1 in UTC+2
        let begin = Utc.with_ymd_and_hms(2025, 4, 30, 23, 30, 0).unwrap();
        let events = vec![Event {
            id: 9,
            name: "Late".to_string(),
            description: String::new(),
            begin,
            end: begin + Duration::hours(1),
        }];

        let april = MonthGrid::build(date(2025, 4, 1), &events, 120);
        assert!(!april.has_event(30));

        let may = MonthGrid::build(date(2025, 5, 1), &events, 120);
        assert!(may.has_event(1));

        let utc_april = MonthGrid::build(date(2025, 4, 1), &events, 0);
        assert!(utc_april.has_event(30));
    }

    #[test]
    fn test_build_is_deterministic() {
        let events = vec![event(1, 2025, 4, 2, 13, 1), event(2, 2025, 4, 9, 8, 1)];
        let a = MonthGrid::build(date(2025, 4, 5), &events, 60);
        let b = MonthGrid::build(date(2025, 4, 5), &events, 60);
        assert_eq!(a, b);
    }
}
