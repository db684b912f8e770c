use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use barkyard_shared::pii::Masked;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostApplication {
    pub name: String,
    pub email: Masked<String>,
    #[serde(default)]
    pub phone: Option<Masked<String>>,
    #[serde(default)]
    pub address: Option<Masked<String>>,
    #[serde(default)]
    pub yard_size_sqft: Option<f64>,
    #[serde(default)]
    pub fenced: Option<bool>,
    #[serde(default)]
    pub water: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HostTicket {
    pub ok: bool,
    pub ticket: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/hosts/apply", post(apply))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/hosts/apply
/// Accept a host application and hand back a tracking ticket
async fn apply(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<HostTicket>, AppError> {
    let application: HostApplication = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("Invalid host application".to_string()))?;

    if !looks_like_email(application.email.inner()) {
        return Err(AppError::BadRequest("Invalid host application".to_string()));
    }

    // Contact fields are Masked, so the debug line never leaks them.
    debug!(?application, "Host application payload");
    info!(applicant = %application.name, "Host application received");

    let ticket = format!("HOST-{}", state.clock.unix_millis());
    Ok(Json(HostTicket { ok: true, ticket }))
}

/// Form-level email shape check: local@domain.tld, no whitespace.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("host@example.com"));
        assert!(looks_like_email("first.last@mail.co.uk"));
        assert!(!looks_like_email("not-an-email"));
        assert!(!looks_like_email("two@@example.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("host@nodot"));
        assert!(!looks_like_email("host@.com"));
        assert!(!looks_like_email("spaced out@example.com"));
    }

    #[test]
    fn test_debug_output_masks_contact_fields() {
        let application: HostApplication = serde_json::from_str(
            r#"{"name": "Dana", "email": "dana@example.com", "phone": "555-0100"}"#,
        )
        .unwrap();
        let rendered = format!("{:?}", application);
        assert!(!rendered.contains("dana@example.com"));
        assert!(!rendered.contains("555-0100"));
        assert!(rendered.contains("Dana"));
    }
}
