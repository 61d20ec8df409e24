//! Simulated rig telemetry source.
//!
//! [`TelemetryCollector`] synthesizes actuator readings shaped like the
//! real hardware's: nominal voltage/current with jitter on every port, a
//! shared vibration level, and an optional degrading port whose current
//! climbs over time so downstream health scores actually move during a
//! demo.

use rand::Rng;

use rigwatch_core::telemetry::{PortReading, TelemetryReading};
use rigwatch_core::types::PortId;

const NOMINAL_RPM: f64 = 1500.0;
const NOMINAL_VOLTAGE: f64 = 220.0;
const NOMINAL_CURRENT: f64 = 5.0;
const NOMINAL_VIBRATION: f64 = 0.5;

/// How much extra current the degrading port gains per collection tick.
const DEGRADE_CURRENT_PER_TICK: f64 = 0.05;
/// Cap on the degradation drift so the score bottoms out instead of
/// running away numerically.
const DEGRADE_CURRENT_CAP: f64 = 3.0;
/// Extra vibration coupled to the degradation drift (a failing actuator
/// shakes the whole rig).
const DEGRADE_VIBRATION_FACTOR: f64 = 0.2;

/// Generates one [`TelemetryReading`] per `collect()` call.
pub struct TelemetryCollector {
    port_count: u32,
    /// Port whose readings drift upward to exercise low health scores.
    degrading_port: Option<PortId>,
    ticks: u64,
}

impl TelemetryCollector {
    /// Create a collector for `port_count` actuator channels.
    pub fn new(port_count: u32, degrading_port: Option<PortId>) -> Self {
        Self {
            port_count,
            degrading_port,
            ticks: 0,
        }
    }

    /// Synthesize the next reading.
    ///
    /// Health is deliberately left unset -- scoring is the server's job,
    /// exactly as with the real rig.
    pub fn collect(&mut self) -> TelemetryReading {
        self.ticks += 1;
        let mut rng = rand::rng();

        let drift = (self.ticks as f64 * DEGRADE_CURRENT_PER_TICK).min(DEGRADE_CURRENT_CAP);
        let degrading_active = self.degrading_port.is_some();

        let vibration = NOMINAL_VIBRATION
            + rng.random_range(-0.05..0.05)
            + if degrading_active {
                drift * DEGRADE_VIBRATION_FACTOR
            } else {
                0.0
            };

        let ports = (1..=self.port_count)
            .map(|port| {
                let degrading = Some(port) == self.degrading_port;
                let current = NOMINAL_CURRENT
                    + rng.random_range(-0.2..0.2)
                    + if degrading { drift } else { 0.0 };
                PortReading {
                    port,
                    voltage: NOMINAL_VOLTAGE + rng.random_range(-1.5..1.5),
                    current,
                    health: None,
                }
            })
            .collect();

        TelemetryReading {
            rpm: NOMINAL_RPM + rng.random_range(-50.0..50.0),
            vibration,
            ports,
        }
    }
}
