//! `rigwatch-agent` -- simulated rig telemetry daemon.
//!
//! Stands in for the hardware rig during development and demos:
//! synthesizes actuator readings and posts them to the Rigwatch ingestion
//! endpoint on a fixed interval.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default | Description                        |
//! |------------------------|----------|---------|------------------------------------|
//! | `RIGWATCH_API_URL`     | yes      | --      | Base URL, e.g. `http://host:3000`  |
//! | `AGENT_PORT_COUNT`     | no       | `3`     | Actuator ports per reading         |
//! | `AGENT_DEGRADING_PORT` | no       | unset   | Port id that drifts toward failure |
//! | `AGENT_INTERVAL_SECS`  | no       | `2`     | Seconds between pushes             |

use std::time::Duration;

use rigwatch_agent::collector::TelemetryCollector;
use rigwatch_agent::sender;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default number of actuator ports per reading.
const DEFAULT_PORT_COUNT: u32 = 3;

/// Default interval between collection + push cycles.
const DEFAULT_INTERVAL_SECS: u64 = 2;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rigwatch_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = std::env::var("RIGWATCH_API_URL").unwrap_or_else(|_| {
        tracing::error!("RIGWATCH_API_URL environment variable is required");
        std::process::exit(1);
    });

    let port_count: u32 = std::env::var("AGENT_PORT_COUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT_COUNT);

    let degrading_port: Option<u32> = std::env::var("AGENT_DEGRADING_PORT")
        .ok()
        .and_then(|v| v.parse().ok());

    let interval_secs: u64 = std::env::var("AGENT_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    let interval = Duration::from_secs(interval_secs);

    tracing::info!(
        api_url = %api_url,
        port_count,
        ?degrading_port,
        interval_secs,
        "Starting rigwatch-agent",
    );

    let mut collector = TelemetryCollector::new(port_count, degrading_port);

    sender::run(&api_url, interval, &mut collector).await;
}
