pub mod availability;
pub mod clock;
pub mod confirmation;
pub mod pricing;
pub mod times;
pub mod validator;
pub mod wizard;

pub use availability::{is_within_slots, MAX_BOOKING_MINUTES, MIN_BOOKING_MINUTES};
pub use clock::{Clock, FixedClock, SystemClock};
pub use confirmation::{ConfirmationIds, FixedIds, RandomIds};
pub use pricing::calculate_price;
pub use times::{available_times, TimeGrid};
pub use validator::{AcceptedBooking, BookingRejection, BookingRequest, BookingValidator};
pub use wizard::{BookingWizard, WizardError, WizardStep};
