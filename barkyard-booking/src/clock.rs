use chrono::{Local, NaiveDateTime};

/// Source of "now" for past-date checks and application tickets.
///
/// The whole system speaks yard-local wall-clock time, so this hands out
/// naive timestamps. Handlers take it injected; tests pin a fixed instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Milliseconds since the Unix epoch, reading the naive instant as UTC.
    fn unix_millis(&self) -> i64 {
        self.now().and_utc().timestamp_millis()
    }
}

/// Wall clock in the server's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant. For deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
