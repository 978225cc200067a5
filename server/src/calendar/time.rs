//! Fixed-offset conversion between local wall-clock time and UTC.
//!
//! Offsets are minutes east of UTC (`+120` for UTC+2), so
//! `utc = local - offset`. DST transitions are not modelled.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Largest offset accepted from clients, matching the range of real zones.
pub const MAX_OFFSET_MINUTES: i32 = 18 * 60;

pub fn is_valid_offset(offset_minutes: i32) -> bool {
    offset_minutes.abs() <= MAX_OFFSET_MINUTES
}

pub fn local_to_utc(local: NaiveDateTime, offset_minutes: i32) -> DateTime<Utc> {
    (local - Duration::minutes(i64::from(offset_minutes))).and_utc()
}

pub fn utc_to_local(instant: DateTime<Utc>, offset_minutes: i32) -> NaiveDateTime {
    instant.naive_utc() + Duration::minutes(i64::from(offset_minutes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn local(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 2)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_east_of_utc_moves_instant_earlier() {
        assert_eq!(
            local_to_utc(local(15, 0), 120),
            Utc.with_ymd_and_hms(2025, 4, 2, 13, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_west_of_utc_can_cross_midnight() {
        assert_eq!(
            local_to_utc(local(22, 30), -300),
            Utc.with_ymd_and_hms(2025, 4, 3, 3, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_utc_to_local_reverses_conversion() {
        for offset in [-720, -300, 0, 330, 840] {
            let instant = local_to_utc(local(9, 45), offset);
            assert_eq!(utc_to_local(instant, offset), local(9, 45));
        }
    }

    #[test]
    fn test_offset_bounds() {
        assert!(is_valid_offset(MAX_OFFSET_MINUTES));
        assert!(is_valid_offset(-MAX_OFFSET_MINUTES));
        assert!(!is_valid_offset(MAX_OFFSET_MINUTES + 1));
    }
}
