//! Telemetry reading data model and its tolerant wire format.
//!
//! A reading is a transient value object: created fresh for each ingestion
//! call, mutated only by health annotation, then published and discarded.
//! Nothing in the pipeline retains a reading after broadcast.
//!
//! The wire format is deliberately lenient. Rigs in the field drop fields,
//! send `null`s, and occasionally emit wrong-typed values mid power-cycle;
//! every numeric field therefore decodes absent, `null`, or non-numeric
//! input as zero instead of rejecting the submission. A port entry that is
//! not a JSON object decodes to an all-zero [`PortReading`]. This can score
//! an absent sensor as healthy -- a documented trade-off of the tolerant
//! policy, not an accident.

use serde::{Deserialize, Deserializer, Serialize};

use crate::scoring::{health_score, Baseline, TrendInputs};
use crate::types::PortId;

/// One actuator channel within a reading.
///
/// `port` identifiers are expected to be unique within a single reading;
/// this is a sensor-source contract and is not checked here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortReading {
    #[serde(default, deserialize_with = "lenient_port_id")]
    pub port: PortId,
    /// Measured supply voltage in volts.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub voltage: f64,
    /// Measured current draw in amperes.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub current: f64,
    /// Derived health score, attached by [`TelemetryReading::annotate`].
    ///
    /// Never read from the wire: a health value supplied by the ingestion
    /// source is discarded and recomputed by the pipeline.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,
}

/// One telemetry snapshot from a rig.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryReading {
    /// Rotational speed of the rig.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rpm: f64,
    /// Vibration intensity in g, shared by every port in the reading
    /// (the rig carries a single vibration sensor).
    #[serde(default, deserialize_with = "lenient_f64")]
    pub vibration: f64,
    #[serde(default, deserialize_with = "lenient_ports")]
    pub ports: Vec<PortReading>,
}

impl TelemetryReading {
    /// Score every port against the baseline and attach the result,
    /// rounded to one decimal place.
    ///
    /// Each port is scored with its own voltage and current plus the
    /// reading's shared vibration value. Overwrites any previous health
    /// values unconditionally.
    pub fn annotate(&mut self, baseline: &Baseline, trends: &TrendInputs) {
        for port in &mut self.ports {
            let score = health_score(port.current, port.voltage, self.vibration, baseline, trends);
            port.health = Some(round_to_tenth(score));
        }
    }
}

/// Round to one decimal place for the wire format.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Lenient deserializers
// ---------------------------------------------------------------------------

/// Decode any JSON value as `f64`, mapping absent, `null`, and non-numeric
/// values to `0.0`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

/// Decode any JSON value as a port identifier, mapping anything that is not
/// a non-negative integer to `0`.
fn lenient_port_id<'de, D>(deserializer: D) -> Result<PortId, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|id| PortId::try_from(id).ok())
        .unwrap_or(0))
}

/// Decode the `ports` array, degrading malformed entries to all-zero
/// readings instead of rejecting the submission. A non-array value decodes
/// as an empty port list.
fn lenient_ports<'de, D>(deserializer: D) -> Result<Vec<PortReading>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
