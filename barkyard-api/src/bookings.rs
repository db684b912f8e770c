use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BookingConfirmation {
    pub ok: bool,
    #[serde(rename = "confirmationId")]
    pub confirmation_id: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/bookings", post(submit_booking))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/bookings
/// Run the full validation pipeline and hand back a confirmation id
async fn submit_booking(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BookingConfirmation>, AppError> {
    // An unreadable body falls through to schema validation as `null`,
    // which reports the same "expected a JSON object" issue.
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let accepted = state
        .validator
        .validate(&state.catalog, &payload)
        .map_err(AppError::from_rejection)?;

    // Guest notes are Masked, so the debug line cannot leak them.
    debug!(request = ?accepted.request, "Validated booking request");
    info!(
        yard = %accepted.request.yard_id,
        confirmation = %accepted.confirmation_id,
        "Booking accepted"
    );

    Ok(Json(BookingConfirmation {
        ok: true,
        confirmation_id: accepted.confirmation_id,
    }))
}
