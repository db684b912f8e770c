use std::collections::BTreeSet;

use barkyard_catalog::Yard;
use barkyard_shared::timegrid;
use chrono::{Duration, NaiveDate, NaiveTime};

/// Selectable 30-minute boundaries for one yard and date.
///
/// Boundaries from overlapping slot windows are deduplicated and kept in
/// time-of-day order. Formatting happens lazily as `labels` is consumed, and
/// the grid can be iterated any number of times. A hypothetical window
/// crossing midnight contributes nothing to the next day.
#[derive(Debug, Clone, Default)]
pub struct TimeGrid {
    points: BTreeSet<NaiveTime>,
}

impl TimeGrid {
    pub fn for_date(yard: &Yard, date: NaiveDate) -> Self {
        let mut points = BTreeSet::new();
        for slot in yard.slots_on(date) {
            let window_end = timegrid::slot_window_end(slot);
            let mut current = slot;
            while current < window_end {
                if current.date() == date {
                    points.insert(current.time());
                }
                current += Duration::minutes(timegrid::GRID_MINUTES);
            }
        }
        Self { points }
    }

    /// Human-readable labels (`8:00 AM`, `10:30 AM`, ...) in chronological
    /// order.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.points.iter().map(|&point| timegrid::format_label(point))
    }

    /// The underlying times of day, in order.
    pub fn times(&self) -> impl Iterator<Item = NaiveTime> + '_ {
        self.points.iter().copied()
    }

    /// Whether a displayed label names a selectable boundary on this date.
    pub fn contains_label(&self, label: &str) -> bool {
        timegrid::parse_label(label)
            .map(|point| self.points.contains(&point))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Collected labels for a yard and date. Empty when the yard publishes no
/// slots that day.
pub fn available_times(yard: &Yard, date: NaiveDate) -> Vec<String> {
    TimeGrid::for_date(yard, date).labels().collect()
}
