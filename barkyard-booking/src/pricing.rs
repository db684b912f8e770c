use chrono::NaiveDateTime;

/// Price for a stay: hourly rate times duration in hours, rounded half-up at
/// the cent.
///
/// No validation happens here. Callers are expected to have run the range
/// through the availability check first; a reversed interval just yields a
/// negative amount.
pub fn calculate_price(hourly_rate: f64, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let hours = (end - start).num_seconds() as f64 / 3600.0;
    (hourly_rate * hours * 100.0).round() / 100.0
}
