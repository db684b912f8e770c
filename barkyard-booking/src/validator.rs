use std::sync::Arc;

use barkyard_catalog::CatalogStore;
use barkyard_shared::pii::Masked;
use barkyard_shared::timegrid;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::availability::{is_range_bookable, MAX_BOOKING_MINUTES, MIN_BOOKING_MINUTES};
use crate::clock::Clock;
use crate::confirmation::ConfirmationIds;

/// Why a booking payload was turned away. Messages are the exact copy shown
/// to guests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingRejection {
    /// Every structural problem with the payload, reported together.
    #[error("Invalid booking payload: {}", .issues.join(", "))]
    SchemaViolations { issues: Vec<String> },

    #[error("Yard not found")]
    YardNotFound,

    #[error("Invalid date format. Please use ISO datetime strings.")]
    UnparseableTimestamps,

    #[error("Start time must be before end time")]
    StartNotBeforeEnd,

    #[error("Minimum booking duration is 30 minutes")]
    TooShort,

    #[error("Maximum booking duration is 180 minutes (3 hours)")]
    TooLong,

    #[error("Cannot book times in the past")]
    InPast,

    #[error("Selected time slot is not available. Please ensure your booking falls within available hours and uses 30-minute intervals.")]
    OutsideAvailability,

    #[error("Number of dogs must be between 1 and 10")]
    GuestCountOutOfRange,

    #[error("Dog names must be non-empty strings")]
    BlankDogName,
}

impl BookingRejection {
    /// An unknown yard is a lookup miss, everything else is a bad request.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BookingRejection::YardNotFound)
    }
}

/// A booking request after validation: typed timestamps, trimmed free text.
/// Guest notes stay masked in Debug output but serialize as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub yard_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_notes: Option<Masked<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dog_names: Option<Vec<String>>,
}

/// Outcome of a successful validation. Nothing is stored anywhere; the
/// confirmation id is the guest's only receipt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedBooking {
    pub request: BookingRequest,
    pub confirmation_id: String,
}

/// Payload fields as they arrived, before semantic checks.
struct RawBooking {
    yard_id: String,
    start: String,
    end: String,
    guest_notes: Option<String>,
    guests: Option<i64>,
    dog_names: Option<Vec<String>>,
}

/// Runs untrusted booking payloads through the fixed check order and hands
/// out confirmations for the ones that survive.
///
/// Checks run in this order, first failure wins: payload shape, yard lookup,
/// timestamp parse, ordering, duration bounds, past check, availability,
/// guest count, dog names. Validation is pure apart from the injected clock
/// and id source.
pub struct BookingValidator {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn ConfirmationIds>,
}

impl BookingValidator {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn ConfirmationIds>) -> Self {
        Self { clock, ids }
    }

    pub fn validate(
        &self,
        catalog: &CatalogStore,
        payload: &Value,
    ) -> Result<AcceptedBooking, BookingRejection> {
        // 1. Payload shape, all violations reported together.
        let raw = extract_payload(payload)?;

        // 2. The yard has to exist before anything time-related is judged.
        let yard = catalog
            .get(&raw.yard_id)
            .ok_or(BookingRejection::YardNotFound)?;

        // 3. Timestamps must parse as naive ISO date-times.
        let (start, end) = match (
            timegrid::parse_datetime(&raw.start),
            timegrid::parse_datetime(&raw.end),
        ) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(BookingRejection::UnparseableTimestamps),
        };

        // 4. Ordering.
        if start >= end {
            return Err(BookingRejection::StartNotBeforeEnd);
        }

        // 5. Duration bounds, short and long reported separately.
        let seconds = (end - start).num_seconds();
        if seconds < MIN_BOOKING_MINUTES * 60 {
            return Err(BookingRejection::TooShort);
        }
        if seconds > MAX_BOOKING_MINUTES * 60 {
            return Err(BookingRejection::TooLong);
        }

        // 6. No booking into the past.
        if start < self.clock.now() {
            return Err(BookingRejection::InPast);
        }

        // 7. Grid alignment and slot containment.
        if !is_range_bookable(yard, start, end) {
            return Err(BookingRejection::OutsideAvailability);
        }

        // 8. Guest count, when supplied.
        if let Some(guests) = raw.guests {
            if !(1..=10).contains(&guests) {
                return Err(BookingRejection::GuestCountOutOfRange);
            }
        }

        // 9. Dog names, when supplied, must survive trimming.
        if let Some(names) = &raw.dog_names {
            if names.iter().any(|name| name.trim().is_empty()) {
                return Err(BookingRejection::BlankDogName);
            }
        }

        let request = BookingRequest {
            yard_id: raw.yard_id,
            start,
            end,
            guest_notes: raw.guest_notes.map(|notes| Masked(notes.trim().to_string())),
            guests: raw.guests.map(|guests| guests as u32),
            dog_names: raw
                .dog_names
                .map(|names| names.iter().map(|name| name.trim().to_string()).collect()),
        };

        Ok(AcceptedBooking {
            request,
            confirmation_id: self.ids.next_confirmation(),
        })
    }
}

fn extract_payload(payload: &Value) -> Result<RawBooking, BookingRejection> {
    let Some(body) = payload.as_object() else {
        return Err(BookingRejection::SchemaViolations {
            issues: vec!["expected a JSON object".to_string()],
        });
    };

    let mut issues = Vec::new();

    let yard_id = required_string(body, "yardId", &mut issues);
    let start = required_string(body, "start", &mut issues);
    let end = required_string(body, "end", &mut issues);
    let guest_notes = optional_string(body, "guestNotes", &mut issues);

    let guests = match body.get("guests") {
        None => None,
        Some(value) => match value.as_i64() {
            Some(n) => Some(n),
            None => {
                issues.push("guests: expected an integer".to_string());
                None
            }
        },
    };

    let dog_names = match body.get("dogNames") {
        None => None,
        Some(Value::Array(items)) => {
            let mut names = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(name) => names.push(name.to_string()),
                    None => issues.push(format!("dogNames[{index}]: expected a string")),
                }
            }
            Some(names)
        }
        Some(_) => {
            issues.push("dogNames: expected an array of strings".to_string());
            None
        }
    };

    if !issues.is_empty() {
        return Err(BookingRejection::SchemaViolations { issues });
    }

    // A missing required field always records an issue, so the defaults
    // below are never reached.
    Ok(RawBooking {
        yard_id: yard_id.unwrap_or_default(),
        start: start.unwrap_or_default(),
        end: end.unwrap_or_default(),
        guest_notes,
        guests,
        dog_names,
    })
}

fn required_string(
    body: &serde_json::Map<String, Value>,
    field: &str,
    issues: &mut Vec<String>,
) -> Option<String> {
    match body.get(field) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            issues.push(format!("{field}: expected a string"));
            None
        }
        None => {
            issues.push(format!("{field}: required"));
            None
        }
    }
}

fn optional_string(
    body: &serde_json::Map<String, Value>,
    field: &str,
    issues: &mut Vec<String>,
) -> Option<String> {
    match body.get(field) {
        None => None,
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            issues.push(format!("{field}: expected a string"));
            None
        }
    }
}
