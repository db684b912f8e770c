use std::sync::Arc;

use barkyard_booking::{BookingValidator, Clock, ConfirmationIds};
use barkyard_catalog::CatalogStore;

/// Shared state handed to every handler. Cheap to clone, everything
/// behind it is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub validator: Arc<BookingValidator>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        catalog: Arc<CatalogStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn ConfirmationIds>,
    ) -> Self {
        let validator = Arc::new(BookingValidator::new(clock.clone(), ids));
        Self {
            catalog,
            validator,
            clock,
        }
    }
}
