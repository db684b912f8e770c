use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

/// Selectable times advance in 30-minute steps.
pub const GRID_MINUTES: i64 = 30;

/// Each published slot opens a 2-hour booking window.
pub const SLOT_WINDOW_MINUTES: i64 = 120;

/// Parses a yard-local timestamp. Accepts `YYYY-MM-DDTHH:MM:SS` and the
/// seconds-less `YYYY-MM-DDTHH:MM`; anything else (including offset suffixes
/// like `Z`) is rejected.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// True when the timestamp sits exactly on the 30-minute grid: minute 0 or 30,
/// no seconds or sub-second component.
pub fn is_on_grid(at: NaiveDateTime) -> bool {
    at.second() == 0 && at.nanosecond() == 0 && (at.minute() == 0 || at.minute() == 30)
}

/// End of the booking window opened by a slot start.
pub fn slot_window_end(slot_start: NaiveDateTime) -> NaiveDateTime {
    slot_start + Duration::minutes(SLOT_WINDOW_MINUTES)
}

/// Rounds a timestamp to the nearest grid point (half rounds up), dropping
/// seconds. Minute 45 rolls over into the next hour.
pub fn nearest_grid(at: NaiveDateTime) -> NaiveDateTime {
    let minute = at.minute() as i64;
    let rounded = (minute + GRID_MINUTES / 2) / GRID_MINUTES * GRID_MINUTES;
    let hour_floor = at
        - Duration::minutes(minute)
        - Duration::seconds(at.second() as i64)
        - Duration::nanoseconds(at.nanosecond() as i64);
    hour_floor + Duration::minutes(rounded)
}

/// Formats a time of day the way the booking forms show it: `8:00 AM`,
/// `12:30 PM`.
pub fn format_label(at: NaiveTime) -> String {
    at.format("%-I:%M %p").to_string()
}

/// Parses a `h:MM AM/PM` label back into a time of day.
pub fn parse_label(label: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(label, "%I:%M %p").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_both_iso_shapes() {
        assert_eq!(
            parse_datetime("2025-11-20T10:00:00"),
            Some(dt(2025, 11, 20, 10, 0, 0))
        );
        assert_eq!(
            parse_datetime("2025-11-20T10:00"),
            Some(dt(2025, 11, 20, 10, 0, 0))
        );
    }

    #[test]
    fn test_parse_rejects_offsets_and_garbage() {
        assert_eq!(parse_datetime("2025-11-20T10:00:00Z"), None);
        assert_eq!(parse_datetime("2025-11-20T10:00:00+02:00"), None);
        assert_eq!(parse_datetime("2025-11-20 10:00:00"), None);
        assert_eq!(parse_datetime("not-a-date"), None);
    }

    #[test]
    fn test_grid_alignment() {
        assert!(is_on_grid(dt(2025, 11, 20, 10, 0, 0)));
        assert!(is_on_grid(dt(2025, 11, 20, 10, 30, 0)));
        assert!(!is_on_grid(dt(2025, 11, 20, 10, 15, 0)));
        assert!(!is_on_grid(dt(2025, 11, 20, 10, 0, 15)));
    }

    #[test]
    fn test_slot_window_spans_two_hours() {
        assert_eq!(
            slot_window_end(dt(2025, 11, 13, 10, 0, 0)),
            dt(2025, 11, 13, 12, 0, 0)
        );
    }

    #[test]
    fn test_nearest_grid_rounds_half_up() {
        assert_eq!(nearest_grid(dt(2025, 11, 20, 10, 14, 59)), dt(2025, 11, 20, 10, 0, 0));
        assert_eq!(nearest_grid(dt(2025, 11, 20, 10, 15, 0)), dt(2025, 11, 20, 10, 30, 0));
        assert_eq!(nearest_grid(dt(2025, 11, 20, 10, 44, 0)), dt(2025, 11, 20, 10, 30, 0));
        // Minute 45 rolls into the next hour.
        assert_eq!(nearest_grid(dt(2025, 11, 20, 10, 45, 0)), dt(2025, 11, 20, 11, 0, 0));
    }

    #[test]
    fn test_label_round_trip() {
        let morning = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let noonish = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
        assert_eq!(format_label(morning), "8:00 AM");
        assert_eq!(format_label(noonish), "12:30 PM");
        assert_eq!(parse_label("8:00 AM"), Some(morning));
        assert_eq!(parse_label("12:30 PM"), Some(noonish));
        assert_eq!(parse_label("25:00 AM"), None);
    }
}
