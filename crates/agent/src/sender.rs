//! HTTP push loop toward the ingestion endpoint.
//!
//! Collects a reading on every tick and POSTs it to `<api>/update`.
//! Failures are logged and the loop keeps going -- the device never blocks
//! on the server, and the server never hears about missed readings.

use std::time::Duration;

use crate::collector::TelemetryCollector;

/// Run the telemetry push loop indefinitely.
pub async fn run(api_url: &str, interval: Duration, collector: &mut TelemetryCollector) {
    let client = reqwest::Client::new();
    let endpoint = format!("{}/update", api_url.trim_end_matches('/'));
    let mut ticker = tokio::time::interval(interval);

    tracing::info!(endpoint = %endpoint, "Starting telemetry push loop");

    loop {
        ticker.tick().await;
        let reading = collector.collect();

        match client.post(&endpoint).json(&reading).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(
                    rpm = reading.rpm,
                    port_count = reading.ports.len(),
                    "Reading accepted"
                );
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Ingestion endpoint rejected reading");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to reach ingestion endpoint");
            }
        }
    }
}
