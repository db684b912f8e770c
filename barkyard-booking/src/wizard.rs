use std::collections::HashMap;
use std::sync::Arc;

use barkyard_catalog::Yard;
use barkyard_shared::timegrid;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use crate::availability::is_range_bookable;
use crate::clock::Clock;
use crate::pricing::calculate_price;
use crate::times::TimeGrid;

const MISSING_SELECTION: &str = "Please select a date, start time, and end time.";
const DATE_IN_PAST: &str = "Date must be in the future. Please select today or a future date.";
const END_NOT_AFTER_START: &str = "End time must be after start time.";
const RANGE_UNAVAILABLE: &str =
    "Selected time is not available or doesn't meet our booking requirements (30-180 minutes, on 30-minute intervals).";
const NO_DOGS: &str = "Please select at least 1 dog.";

/// The four stations of the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    SelectTime,
    GuestInfo,
    Review,
    Confirmed,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::SelectTime => "Select Time",
            WizardStep::GuestInfo => "Guest Info",
            WizardStep::Review => "Review",
            WizardStep::Confirmed => "Confirm",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Invalid step transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// The current step's checks failed; the message is the guest-facing copy.
    #[error("{message}")]
    StepIncomplete { message: String },
}

/// Everything the guest has filled in so far.
#[derive(Debug, Clone)]
pub struct WizardForm {
    pub date: Option<NaiveDate>,
    pub start_label: Option<String>,
    pub end_label: Option<String>,
    pub guest_notes: String,
    pub guests: u32,
    pub dog_names: Vec<String>,
}

impl Default for WizardForm {
    fn default() -> Self {
        Self {
            date: None,
            start_label: None,
            end_label: None,
            guest_notes: String::new(),
            guests: 1,
            dog_names: Vec::new(),
        }
    }
}

/// The booking flow as an explicit state machine: a step, the form so far,
/// and per-step errors.
///
/// `next`/`back` move between steps, running the leaving step's checks the
/// way the booking pages do. `submit` turns a valid Review step into the
/// payload for the booking validator; `complete` files the confirmation and
/// parks the wizard on the receipt.
pub struct BookingWizard {
    yard: Yard,
    clock: Arc<dyn Clock>,
    step: WizardStep,
    form: WizardForm,
    errors: HashMap<WizardStep, String>,
    confirmation_id: Option<String>,
}

impl BookingWizard {
    pub fn new(yard: Yard, clock: Arc<dyn Clock>) -> Self {
        Self {
            yard,
            clock,
            step: WizardStep::SelectTime,
            form: WizardForm::default(),
            errors: HashMap::new(),
            confirmation_id: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &WizardForm {
        &self.form
    }

    /// The error blocking the current step, if its checks failed.
    pub fn error(&self) -> Option<&str> {
        self.errors.get(&self.step).map(String::as_str)
    }

    pub fn confirmation_id(&self) -> Option<&str> {
        self.confirmation_id.as_deref()
    }

    /// Selectable boundaries for the chosen date.
    pub fn time_grid(&self) -> TimeGrid {
        match self.form.date {
            Some(date) => TimeGrid::for_date(&self.yard, date),
            None => TimeGrid::default(),
        }
    }

    /// Picks a date. Previously chosen labels that are not selectable on the
    /// new date are dropped, the way the time step resets its dropdowns.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.form.date = Some(date);
        let grid = TimeGrid::for_date(&self.yard, date);
        if let Some(label) = &self.form.start_label {
            if !grid.contains_label(label) {
                self.form.start_label = None;
            }
        }
        if let Some(label) = &self.form.end_label {
            if !grid.contains_label(label) {
                self.form.end_label = None;
            }
        }
    }

    pub fn set_start_label(&mut self, label: Option<String>) {
        self.form.start_label = label;
    }

    pub fn set_end_label(&mut self, label: Option<String>) {
        self.form.end_label = label;
    }

    pub fn set_guests(&mut self, guests: u32) {
        self.form.guests = guests;
    }

    pub fn set_dog_names(&mut self, names: Vec<String>) {
        self.form.dog_names = names;
    }

    pub fn set_guest_notes(&mut self, notes: impl Into<String>) {
        self.form.guest_notes = notes.into();
    }

    /// Advances to the next station if the current step's checks pass.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let target = match self.step {
            WizardStep::SelectTime => WizardStep::GuestInfo,
            WizardStep::GuestInfo => WizardStep::Review,
            WizardStep::Review | WizardStep::Confirmed => {
                return Err(self.invalid_transition(WizardStep::Confirmed));
            }
        };
        self.check_step(self.step)?;
        self.step = target;
        Ok(target)
    }

    /// Steps back toward Select Time, clearing the current step's error.
    /// The first step stays put; the receipt is final.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        if self.step == WizardStep::Confirmed {
            return Err(self.invalid_transition(WizardStep::Review));
        }
        self.errors.remove(&self.step);
        self.step = match self.step {
            WizardStep::Review => WizardStep::GuestInfo,
            _ => WizardStep::SelectTime,
        };
        Ok(self.step)
    }

    /// Re-runs the Review checks and produces the booking payload to submit.
    pub fn submit(&mut self) -> Result<Value, WizardError> {
        if self.step != WizardStep::Review {
            return Err(self.invalid_transition(WizardStep::Confirmed));
        }
        self.check_step(WizardStep::Review)?;

        // The checks just guaranteed a complete selection.
        let (start, end) = match self.selected_range() {
            Some(range) => range,
            None => {
                return Err(WizardError::StepIncomplete {
                    message: MISSING_SELECTION.to_string(),
                })
            }
        };

        let mut payload = json!({
            "yardId": self.yard.id,
            "start": start,
            "end": end,
            "guests": self.form.guests,
        });
        let notes = self.form.guest_notes.trim();
        if !notes.is_empty() {
            payload["guestNotes"] = json!(notes);
        }
        if !self.form.dog_names.is_empty() {
            payload["dogNames"] = json!(self.form.dog_names);
        }
        Ok(payload)
    }

    /// Files the confirmation for a submitted booking and moves to the
    /// receipt.
    pub fn complete(&mut self, confirmation_id: String) -> Result<WizardStep, WizardError> {
        if self.step != WizardStep::Review {
            return Err(self.invalid_transition(WizardStep::Confirmed));
        }
        self.confirmation_id = Some(confirmation_id);
        self.step = WizardStep::Confirmed;
        Ok(self.step)
    }

    /// What the Review step quotes: rate times the selected duration. `None`
    /// until a full range is selected.
    pub fn quoted_price(&self) -> Option<f64> {
        self.selected_range()
            .map(|(start, end)| calculate_price(self.yard.price, start, end))
    }

    fn selected_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let date = self.form.date?;
        let start = timegrid::parse_label(self.form.start_label.as_deref()?)?;
        let end = timegrid::parse_label(self.form.end_label.as_deref()?)?;
        Some((date.and_time(start), date.and_time(end)))
    }

    fn invalid_transition(&self, to: WizardStep) -> WizardError {
        WizardError::InvalidTransition {
            from: self.step.label().to_string(),
            to: to.label().to_string(),
        }
    }

    fn check_step(&mut self, step: WizardStep) -> Result<(), WizardError> {
        self.errors.remove(&step);
        let outcome = match step {
            WizardStep::SelectTime => self.check_select_time(),
            WizardStep::GuestInfo => self.check_guest_info(),
            WizardStep::Review => self.check_review(),
            WizardStep::Confirmed => Ok(()),
        };
        if let Err(message) = &outcome {
            self.errors.insert(step, message.clone());
        }
        outcome.map_err(|message| WizardError::StepIncomplete { message })
    }

    fn check_select_time(&self) -> Result<(), String> {
        // A chosen date is judged before the rest of the selection.
        if let Some(date) = self.form.date {
            if date < self.clock.now().date() {
                return Err(DATE_IN_PAST.to_string());
            }
        }
        if self.form.date.is_none()
            || self.is_label_missing(&self.form.start_label)
            || self.is_label_missing(&self.form.end_label)
        {
            return Err(MISSING_SELECTION.to_string());
        }
        self.check_selected_range()
    }

    fn check_guest_info(&self) -> Result<(), String> {
        if self.form.guests < 1 {
            return Err(NO_DOGS.to_string());
        }
        Ok(())
    }

    fn check_review(&self) -> Result<(), String> {
        if self.form.date.is_none()
            || self.is_label_missing(&self.form.start_label)
            || self.is_label_missing(&self.form.end_label)
        {
            return Err(MISSING_SELECTION.to_string());
        }
        if self.form.guests < 1 {
            return Err(NO_DOGS.to_string());
        }
        if let Some(date) = self.form.date {
            if date < self.clock.now().date() {
                return Err(DATE_IN_PAST.to_string());
            }
        }
        self.check_selected_range()
    }

    fn check_selected_range(&self) -> Result<(), String> {
        let (start, end) = match self.selected_range() {
            Some(range) => range,
            // Labels that do not even parse cannot be available.
            None => return Err(RANGE_UNAVAILABLE.to_string()),
        };
        if end <= start {
            return Err(END_NOT_AFTER_START.to_string());
        }
        if !is_range_bookable(&self.yard, start, end) {
            return Err(RANGE_UNAVAILABLE.to_string());
        }
        Ok(())
    }

    fn is_label_missing(&self, label: &Option<String>) -> bool {
        label.as_deref().map(str::trim).unwrap_or("").is_empty()
    }
}
