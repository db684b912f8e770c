use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use barkyard_booking::available_times;
use barkyard_catalog::{Yard, YardFilter, YardSummary};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    pub times: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/yards", get(list_yards))
        .route("/v1/yards/{id}", get(get_yard))
        .route("/v1/yards/{id}/availability", get(yard_availability))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/yards
/// List yard summaries in catalog order, optionally filtered
async fn list_yards(
    State(state): State<AppState>,
    Query(filter): Query<YardFilter>,
) -> Json<Vec<YardSummary>> {
    Json(state.catalog.summaries(&filter))
}

/// GET /v1/yards/{id}
/// Retrieve a single yard with its full slot calendar
async fn get_yard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Yard>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Not found".to_string()))
}

/// GET /v1/yards/{id}/availability?date=2025-11-20
/// Bookable start/end time labels for one calendar day
async fn yard_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let yard = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound("Not found".to_string()))?;

    let date = params
        .date
        .parse::<NaiveDate>()
        .map_err(|_| AppError::BadRequest("Invalid date. Please use YYYY-MM-DD.".to_string()))?;

    Ok(Json(AvailabilityResponse {
        date,
        times: available_times(yard, date),
    }))
}
