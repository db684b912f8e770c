use barkyard_catalog::Yard;
use barkyard_shared::timegrid;
use chrono::NaiveDateTime;

/// Shortest bookable visit.
pub const MIN_BOOKING_MINUTES: i64 = 30;

/// Longest bookable visit.
pub const MAX_BOOKING_MINUTES: i64 = 180;

/// Decides whether a requested range is bookable against the yard's published
/// slots.
///
/// Total over arbitrary string input: timestamps that fail to parse make the
/// range not bookable, they never make this fail.
pub fn is_within_slots(yard: &Yard, start: &str, end: &str) -> bool {
    match (timegrid::parse_datetime(start), timegrid::parse_datetime(end)) {
        (Some(start), Some(end)) => is_range_bookable(yard, start, end),
        _ => false,
    }
}

/// The same decision for endpoints that already parsed.
///
/// In order: `start < end`, duration within bounds, both endpoints on the
/// 30-minute grid, and the whole range inside a single slot's 2-hour window.
/// Ranges never splice across two slots.
pub fn is_range_bookable(yard: &Yard, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    if start >= end {
        return false;
    }

    let seconds = (end - start).num_seconds();
    if seconds < MIN_BOOKING_MINUTES * 60 || seconds > MAX_BOOKING_MINUTES * 60 {
        return false;
    }

    if !timegrid::is_on_grid(start) || !timegrid::is_on_grid(end) {
        return false;
    }

    yard.slots
        .iter()
        .any(|&slot| slot <= start && end <= timegrid::slot_window_end(slot))
}
