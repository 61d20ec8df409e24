use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use rigwatch_core::scoring::{Baseline, TrendInputs};
use rigwatch_core::telemetry::TelemetryReading;
use rigwatch_events::SensorUpdate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Success acknowledgement for an accepted submission.
#[derive(Debug, Serialize)]
pub struct IngestAck {
    pub status: &'static str,
}

/// POST /update
///
/// Accept one telemetry submission, score every port, and publish the
/// annotated reading for broadcast. The body is parsed leniently -- missing
/// and wrong-typed fields default to zero -- so only a request with no
/// parseable JSON at all is rejected, before any scoring occurs. A
/// submission is never scored halfway: it either fails the parse entirely
/// or every port entry is scored.
pub async fn ingest(State(state): State<AppState>, body: Bytes) -> AppResult<Json<IngestAck>> {
    let mut reading: TelemetryReading =
        serde_json::from_slice(&body).map_err(|_| AppError::NoJsonBody)?;

    // Trend derivation from history is not implemented; the model always
    // sees zero trends on this path.
    reading.annotate(&Baseline::default(), &TrendInputs::default());

    tracing::debug!(
        rpm = reading.rpm,
        port_count = reading.ports.len(),
        "Accepted telemetry reading"
    );

    state.event_bus.publish(SensorUpdate::new(reading));

    Ok(Json(IngestAck { status: "ok" }))
}
