pub mod health;
pub mod telemetry;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /update      telemetry ingestion (POST)
/// /ws          monitoring WebSocket (GET, upgrade)
/// /health      service liveness (GET)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(telemetry::router())
        .route("/ws", get(ws::ws_handler))
}
