use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::{json, Value};

use barkyard_api::{app, AppState};
use barkyard_booking::{ConfirmationIds, FixedClock, FixedIds, RandomIds};
use barkyard_catalog::fixtures;

// The catalog seeds 30 days of slots from Nov 13, and the pinned clock
// sits two days in at 9 AM.
const NOW: &str = "2025-11-15T09:00:00";

fn server() -> TestServer {
    server_with_ids(Arc::new(FixedIds("BB-TEST42".into())))
}

fn server_with_ids(ids: Arc<dyn ConfirmationIds>) -> TestServer {
    let first_date = NaiveDate::from_ymd_opt(2025, 11, 13).unwrap();
    let catalog = Arc::new(fixtures::seed_catalog(first_date, 30));
    let clock = Arc::new(FixedClock(NOW.parse().unwrap()));
    let state = AppState::new(catalog, clock, ids);
    TestServer::new(app(state)).unwrap()
}

fn valid_booking() -> Value {
    json!({
        "yardId": "ridge-creek",
        "start": "2025-11-20T10:00:00",
        "end": "2025-11-20T12:00:00",
        "guests": 2,
        "dogNames": ["Rex", "Biscuit"],
        "guestNotes": "Two friendly labs."
    })
}

// ============================================================================
// Yards
// ============================================================================

#[tokio::test]
async fn test_list_yards_returns_catalog_in_seed_order() {
    let server = server();
    let response = server.get("/v1/yards").await;
    response.assert_status_ok();

    let yards: Value = response.json();
    let yards = yards.as_array().unwrap();
    assert_eq!(yards.len(), 12);
    assert_eq!(yards[0]["id"], "ridge-creek");
    assert_eq!(yards[0]["price"], 18.0);
    assert_eq!(yards[11]["id"], "luxury-estate");
    // Summaries leave out the slot calendar.
    assert!(yards[0].get("slots").is_none());
}

#[tokio::test]
async fn test_list_yards_applies_filters() {
    let server = server();
    let response = server
        .get("/v1/yards")
        .add_query_param("fenced", true)
        .add_query_param("price_max", 20.0)
        .await;
    response.assert_status_ok();

    let yards: Value = response.json();
    let ids: Vec<&str> = yards
        .as_array()
        .unwrap()
        .iter()
        .map(|yard| yard["id"].as_str().unwrap())
        .collect();
    // Price bound is inclusive, so the $20 yard stays in.
    assert_eq!(
        ids,
        ["ridge-creek", "meadow-shade", "small-dog-haven", "hiking-basecamp"]
    );
}

#[tokio::test]
async fn test_get_yard_returns_full_record() {
    let server = server();
    let response = server.get("/v1/yards/ridge-creek").await;
    response.assert_status_ok();

    let yard: Value = response.json();
    assert_eq!(yard["name"], "Ridge Creek Yard");
    assert_eq!(yard["hostNotes"], "Please keep the gate latched.");
    assert_eq!(yard["slots"][0], "2025-11-13T08:00:00");
}

#[tokio::test]
async fn test_get_yard_unknown_is_not_found() {
    let server = server();
    let response = server.get("/v1/yards/no-such-yard").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Not found" }));
}

// ============================================================================
// Availability
// ============================================================================

#[tokio::test]
async fn test_availability_lists_half_hour_labels() {
    let server = server();
    let response = server
        .get("/v1/yards/ridge-creek/availability")
        .add_query_param("date", "2025-11-20")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["date"], "2025-11-20");
    let times: Vec<&str> = body["times"]
        .as_array()
        .unwrap()
        .iter()
        .map(|label| label.as_str().unwrap())
        .collect();
    // Slot starts at 8, 10, 12, 2, 4 collapse into one continuous run of
    // half-hour marks; window ends are not offered as start times.
    assert_eq!(times.len(), 20);
    assert_eq!(times.first(), Some(&"8:00 AM"));
    assert_eq!(times.last(), Some(&"5:30 PM"));
    assert!(times.contains(&"12:30 PM"));
}

#[tokio::test]
async fn test_availability_outside_calendar_is_empty() {
    let server = server();
    let response = server
        .get("/v1/yards/ridge-creek/availability")
        .add_query_param("date", "2026-01-15")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["times"], json!([]));
}

#[tokio::test]
async fn test_availability_rejects_malformed_date() {
    let server = server();
    let response = server
        .get("/v1/yards/ridge-creek/availability")
        .add_query_param("date", "next-tuesday")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Invalid date. Please use YYYY-MM-DD." }));
}

#[tokio::test]
async fn test_availability_unknown_yard_is_not_found() {
    let server = server();
    let response = server
        .get("/v1/yards/no-such-yard/availability")
        .add_query_param("date", "2025-11-20")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Bookings
// ============================================================================

#[tokio::test]
async fn test_booking_round_trip() {
    let server = server();
    let response = server.post("/v1/bookings").json(&valid_booking()).await;
    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true, "confirmationId": "BB-TEST42" }));
}

#[tokio::test]
async fn test_booking_confirmation_ids_have_expected_shape() {
    let server = server_with_ids(Arc::new(RandomIds));
    let response = server.post("/v1/bookings").json(&valid_booking()).await;
    response.assert_status_ok();

    let body: Value = response.json();
    let id = body["confirmationId"].as_str().unwrap();
    assert!(id.starts_with("BB-"));
    assert_eq!(id.len(), 9);
    assert!(id[3..]
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[tokio::test]
async fn test_booking_in_past_is_rejected() {
    // Clock is pinned to Nov 15, so the 14th is yesterday.
    let server = server();
    let mut booking = valid_booking();
    booking["start"] = json!("2025-11-14T10:00:00");
    booking["end"] = json!("2025-11-14T11:00:00");

    let response = server.post("/v1/bookings").json(&booking).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Cannot book times in the past" }));
}

#[tokio::test]
async fn test_booking_unknown_yard_is_not_found() {
    let server = server();
    let mut booking = valid_booking();
    booking["yardId"] = json!("no-such-yard");

    let response = server.post("/v1/bookings").json(&booking).await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Yard not found" }));
}

#[tokio::test]
async fn test_booking_offset_timestamps_are_rejected() {
    let server = server();
    let mut booking = valid_booking();
    booking["start"] = json!("2025-11-20T10:00:00Z");

    let response = server.post("/v1/bookings").json(&booking).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": "Invalid date format. Please use ISO datetime strings."
    }));
}

#[tokio::test]
async fn test_booking_schema_issues_are_aggregated() {
    let server = server();
    let response = server.post("/v1/bookings").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": "Invalid booking payload: yardId: required, start: required, end: required"
    }));
}

#[tokio::test]
async fn test_booking_malformed_body_reads_as_schema_violation() {
    let server = server();
    let response = server.post("/v1/bookings").text("{not json").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": "Invalid booking payload: expected a JSON object"
    }));
}

#[tokio::test]
async fn test_booking_too_long_is_rejected() {
    let server = server();
    let mut booking = valid_booking();
    booking["start"] = json!("2025-11-20T08:00:00");
    booking["end"] = json!("2025-11-20T11:30:00");

    let response = server.post("/v1/bookings").json(&booking).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": "Maximum booking duration is 180 minutes (3 hours)"
    }));
}

#[tokio::test]
async fn test_booking_guest_count_bounds() {
    let server = server();

    let mut booking = valid_booking();
    booking["guests"] = json!(0);
    let response = server.post("/v1/bookings").json(&booking).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Number of dogs must be between 1 and 10" }));

    booking["guests"] = json!(10);
    let response = server.post("/v1/bookings").json(&booking).await;
    response.assert_status_ok();
}

// ============================================================================
// Hosts
// ============================================================================

#[tokio::test]
async fn test_host_application_issues_clock_stamped_ticket() {
    let server = server();
    let response = server
        .post("/v1/hosts/apply")
        .json(&json!({
            "name": "Dana",
            "email": "dana@example.com",
            "yardSizeSqft": 4800,
            "fenced": true
        }))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true, "ticket": "HOST-1763197200000" }));
}

#[tokio::test]
async fn test_host_application_rejects_bad_email() {
    let server = server();
    let response = server
        .post("/v1/hosts/apply")
        .json(&json!({ "name": "Dana", "email": "not-an-email" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Invalid host application" }));
}

#[tokio::test]
async fn test_host_application_requires_name_and_email() {
    let server = server();
    let response = server
        .post("/v1/hosts/apply")
        .json(&json!({ "email": "dana@example.com" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Invalid host application" }));
}
