//! Integration tests for the telemetry ingestion endpoint.
//!
//! These exercise the full router (middleware included) via
//! `tower::ServiceExt`, with an event-bus subscriber standing in for the
//! broadcast side.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_empty, post_json, test_state};
use tokio::sync::broadcast::error::TryRecvError;

// ---------------------------------------------------------------------------
// Test: a baseline submission is acknowledged and published with health 100
// ---------------------------------------------------------------------------

#[tokio::test]
async fn baseline_submission_is_acknowledged_and_published() {
    let state = test_state();
    let mut updates = state.event_bus.subscribe();
    let app = build_test_app(state);

    let response = post_json(
        app,
        "/update",
        r#"{"rpm": 1000, "vibration": 0.5,
            "ports": [{"port": 1, "voltage": 220, "current": 5}]}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");

    // The publish happens before the response, so the update is already
    // buffered on the bus.
    let update = updates.try_recv().expect("update should be published");
    assert_eq!(update.reading.rpm, 1000.0);
    assert_eq!(update.reading.ports[0].port, 1);
    assert_eq!(update.reading.ports[0].health, Some(100.0));
}

// ---------------------------------------------------------------------------
// Test: every port in a submission is scored
// ---------------------------------------------------------------------------

#[tokio::test]
async fn every_port_is_scored_against_shared_vibration() {
    let state = test_state();
    let mut updates = state.event_bus.subscribe();
    let app = build_test_app(state);

    let response = post_json(
        app,
        "/update",
        r#"{"rpm": 1450, "vibration": 0.5,
            "ports": [{"port": 1, "voltage": 220, "current": 5},
                      {"port": 2, "voltage": 220, "current": 6},
                      {"port": 3, "voltage": 221, "current": 5}]}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let update = updates.try_recv().expect("update should be published");
    assert_eq!(update.reading.ports.len(), 3);
    assert_eq!(update.reading.ports[0].health, Some(100.0));
    assert_eq!(update.reading.ports[1].health, Some(97.0));
    // 1 V deviation: 1/220 * 20 = 0.09 -> rounded to 99.9.
    assert_eq!(update.reading.ports[2].health, Some(99.9));
}

// ---------------------------------------------------------------------------
// Test: an empty body is rejected and nothing is published
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_body_is_rejected_without_publishing() {
    let state = test_state();
    let mut updates = state.event_bus.subscribe();
    let app = build_test_app(state);

    let response = post_empty(app, "/update").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "no json body");

    assert!(
        matches!(updates.try_recv(), Err(TryRecvError::Empty)),
        "rejected submissions must not reach the bus"
    );
}

// ---------------------------------------------------------------------------
// Test: an unparseable body is rejected the same way
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unparseable_body_is_rejected() {
    let state = test_state();
    let mut updates = state.event_bus.subscribe();
    let app = build_test_app(state);

    let response = post_json(app, "/update", "this is not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "no json body");
    assert!(matches!(updates.try_recv(), Err(TryRecvError::Empty)));
}

// ---------------------------------------------------------------------------
// Test: malformed port entries degrade to zeros instead of aborting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_port_entries_degrade_to_zeros() {
    let state = test_state();
    let mut updates = state.event_bus.subscribe();
    let app = build_test_app(state);

    let response = post_json(
        app,
        "/update",
        r#"{"rpm": 800, "vibration": "high",
            "ports": [{"port": 2, "voltage": "n/a", "current": null}, 17]}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let update = updates.try_recv().expect("update should be published");
    // Zeroed voltage costs the full relative-deviation penalty (20 points);
    // everything else is at or below baseline.
    assert_eq!(update.reading.vibration, 0.0);
    assert_eq!(update.reading.ports[0].port, 2);
    assert_eq!(update.reading.ports[0].health, Some(80.0));
    // The non-object entry became an all-zero port and was still scored.
    assert_eq!(update.reading.ports[1].port, 0);
    assert_eq!(update.reading.ports[1].health, Some(80.0));
}

// ---------------------------------------------------------------------------
// Test: a health value supplied by the source is overwritten
// ---------------------------------------------------------------------------

#[tokio::test]
async fn supplied_health_is_overwritten_by_the_scorer() {
    let state = test_state();
    let mut updates = state.event_bus.subscribe();
    let app = build_test_app(state);

    let response = post_json(
        app,
        "/update",
        r#"{"rpm": 1000, "vibration": 0.5,
            "ports": [{"port": 1, "voltage": 220, "current": 5, "health": 3.2}]}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let update = updates.try_recv().expect("update should be published");
    assert_eq!(update.reading.ports[0].health, Some(100.0));
}

// ---------------------------------------------------------------------------
// Test: GET /health returns liveness info
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app(test_state());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["connected_clients"], 0);
}

// ---------------------------------------------------------------------------
// Test: unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(test_state());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(test_state());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id
        .expect("checked above")
        .to_str()
        .expect("header should be ASCII");
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}
