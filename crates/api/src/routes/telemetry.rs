use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount the telemetry ingestion route.
pub fn router() -> Router<AppState> {
    Router::new().route("/update", post(handlers::telemetry::ingest))
}
