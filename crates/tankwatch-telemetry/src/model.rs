//! Domain model types for derived telemetry
//!
//! These are the wire shapes consumed by the dashboard and mobile clients.
//! Field naming is a published contract (`rawLevel`, `capacity`,
//! `temperature`, `airPressure`) and must stay stable across releases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fill level severity, thresholds fixed at 20% and 50%
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelBand {
    Low,
    Medium,
    Good,
}

/// Temperature severity, thresholds fixed at 10°C and 30°C
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempBand {
    Cold,
    Normal,
    Hot,
}

/// One tank's derived reading, recomputed on every snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedTankReading {
    pub tank_number: i64,
    pub name: String,
    pub capacity: i64,
    /// Resolved level reading, unclamped; raw sensor units are liters
    pub raw_level: f64,
    pub volume_liters: f64,
    pub raw_temperature: f64,
    /// Same value as `raw_temperature`; retained for older clients
    pub temperature: f64,
    /// Bounded to [0, 100] regardless of sensor overfill
    pub fill_percent: u8,
    pub level_band: LevelBand,
    pub temp_band: TempBand,
    /// Ambient reading copied onto every tank; legacy mobile-client contract
    pub air_pressure: Option<f64>,
}

/// The full fleet view assembled for one poll
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSnapshot {
    /// Ordered by tank configuration id ascending
    pub tanks: Vec<DerivedTankReading>,
    /// Null when the ambient pressure column is absent, so clients can
    /// distinguish "no sensor" from a zero reading
    pub air_pressure: Option<f64>,
    pub total_capacity: i64,
    /// Sum of unclamped raw levels; may exceed `total_capacity`
    pub total_utilized_volume: f64,
    /// One decimal place
    pub utilization_rate_percent: f64,
    /// Capture time of the snapshot, not the sensor's write time
    pub timestamp: DateTime<Utc>,
}
