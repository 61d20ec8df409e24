//! Rule-based actuator health scoring.
//!
//! Pure logic -- no I/O and no shared state. The caller supplies the raw
//! sensor values and the reference baseline; the result is a 0–100 score
//! where higher is healthier.
//!
//! Inputs are not validated: negative or absurd sensor values are accepted
//! and simply produce a clamped score. That mirrors the behaviour of the
//! deployed rigs, which occasionally report garbage during power cycling.

/// Penalty per ampere of current draw above baseline.
const CURRENT_INCREASE_WEIGHT: f64 = 3.0;

/// Penalty weight for relative voltage deviation from baseline.
const VOLTAGE_DEVIATION_WEIGHT: f64 = 20.0;

/// Penalty per g of vibration above baseline.
const VIBRATION_INCREASE_WEIGHT: f64 = 8.0;

/// Flat penalty applied per trend input that exceeds its threshold.
const TREND_PENALTY: f64 = 5.0;
const CURRENT_TREND_THRESHOLD: f64 = 0.05;
const VIBRATION_TREND_THRESHOLD: f64 = 0.02;

/// Flat penalty when current and vibration are elevated simultaneously.
///
/// Applied on top of the per-sensor penalties above -- correlated excess is
/// treated as a distinct fault signature, not a replacement for them.
const CORRELATION_PENALTY: f64 = 15.0;
const CORRELATION_CURRENT_FACTOR: f64 = 0.2;
const CORRELATION_VIBRATION_FACTOR: f64 = 0.5;

/// Flat penalty when apparent power exceeds the overdraw threshold.
const POWER_OVERDRAW_PENALTY: f64 = 8.0;
const POWER_OVERDRAW_FACTOR: f64 = 1.2;

/// Nominal reference values for a healthy actuator channel.
#[derive(Debug, Clone)]
pub struct Baseline {
    /// Nominal current draw in amperes.
    pub current: f64,
    /// Nominal supply voltage in volts.
    pub voltage: f64,
    /// Nominal vibration intensity in g.
    pub vibration: f64,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            current: 5.0,
            voltage: 220.0,
            vibration: 0.5,
        }
    }
}

/// Rate-of-change indicators consumed by the trend penalties.
///
/// No component currently derives these from history -- the ingestion path
/// always passes zeros. The fields exist so a future trend-computation
/// stage can feed the model without changing its signature.
#[derive(Debug, Clone, Default)]
pub struct TrendInputs {
    pub current: f64,
    pub vibration: f64,
}

/// Score a single actuator channel.
///
/// Starts from 100.0 and subtracts the rule penalties in order:
///
/// 1. Current draw above baseline (linear).
/// 2. Voltage deviation from baseline in either direction (relative).
/// 3. Vibration above baseline (linear).
/// 4. Trend penalties (flat, independent per trend input).
/// 5. Correlated current + vibration excess (flat).
/// 6. Power overdraw (flat).
///
/// The result is clamped to `[0, 100]`.
pub fn health_score(
    current: f64,
    voltage: f64,
    vibration: f64,
    baseline: &Baseline,
    trends: &TrendInputs,
) -> f64 {
    let mut score = 100.0;

    score -= (current - baseline.current).max(0.0) * CURRENT_INCREASE_WEIGHT;
    score -= (voltage - baseline.voltage).abs() / baseline.voltage * VOLTAGE_DEVIATION_WEIGHT;
    score -= (vibration - baseline.vibration).max(0.0) * VIBRATION_INCREASE_WEIGHT;

    if trends.current > CURRENT_TREND_THRESHOLD {
        score -= TREND_PENALTY;
    }
    if trends.vibration > VIBRATION_TREND_THRESHOLD {
        score -= TREND_PENALTY;
    }

    let current_elevated =
        current - baseline.current > CORRELATION_CURRENT_FACTOR * baseline.current;
    let vibration_elevated =
        vibration - baseline.vibration > CORRELATION_VIBRATION_FACTOR * baseline.vibration;
    if current_elevated && vibration_elevated {
        score -= CORRELATION_PENALTY;
    }

    if voltage * current > POWER_OVERDRAW_FACTOR * (baseline.voltage * baseline.current) {
        score -= POWER_OVERDRAW_PENALTY;
    }

    score.clamp(0.0, 100.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
