use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use barkyard_booking::BookingRejection;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    /// Map a booking rejection onto the wire: unknown yards are 404s,
    /// everything else is a 400 with the rejection message as the body.
    pub fn from_rejection(rejection: BookingRejection) -> Self {
        if rejection.is_not_found() {
            AppError::NotFound(rejection.to_string())
        } else {
            AppError::BadRequest(rejection.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_yard_maps_to_not_found() {
        let err = AppError::from_rejection(BookingRejection::YardNotFound);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_other_rejections_map_to_bad_request() {
        let err = AppError::from_rejection(BookingRejection::StartNotBeforeEnd);
        match err {
            AppError::BadRequest(msg) => {
                assert_eq!(msg, "Start time must be before end time");
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }
}
