//! Snapshot assembly
//!
//! The read-side pipeline behind GET /api/tanks: load the current tank
//! definitions and the latest raw row, resolve and derive per tank, then
//! aggregate. Never mutates anything, so every poll is safely re-runnable.
//! The two reads are issued concurrently and are not transactionally
//! consistent with each other; a config change racing a poll may be
//! reflected partially. Freshness wins over strict consistency here.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use tankwatch_common::TankwatchError;
use tankwatch_persistence::entity::tank_config;

use crate::metrics;
use crate::model::{AggregateSnapshot, DerivedTankReading};
use crate::resolve::resolve_numeric;
use crate::row::TelemetryRow;
use crate::service::{tank_config as tank_config_service, telemetry};

/// Where the assembler reads raw telemetry from
#[derive(Clone, Debug)]
pub struct TelemetrySource {
    /// Producer table, read-only from this side
    pub table: String,
    /// Well-known ambient pressure column, not part of per-tank config
    pub air_pressure_field: String,
}

/// Assemble one fresh `AggregateSnapshot`.
///
/// An empty config store yields an empty-tanks snapshot; a missing telemetry
/// row is the one hard failure (`NoTelemetryData`).
pub async fn assemble(
    db: &DatabaseConnection,
    source: &TelemetrySource,
) -> anyhow::Result<AggregateSnapshot> {
    let (configs, row) = tokio::join!(
        tank_config_service::find_all(db),
        telemetry::latest_row(db, &source.table)
    );

    let configs = configs?;
    let row = row?.ok_or(TankwatchError::NoTelemetryData)?;

    Ok(build_snapshot(&configs, &row, &source.air_pressure_field))
}

/// Pure assembly over already-fetched inputs.
pub fn build_snapshot(
    configs: &[tank_config::Model],
    row: &TelemetryRow,
    air_pressure_field: &str,
) -> AggregateSnapshot {
    // Absence stays None here: clients distinguish "no sensor" from a zero
    // reading.
    let air_pressure = row.lookup_numeric(air_pressure_field);

    let tanks: Vec<DerivedTankReading> = configs
        .iter()
        .map(|config| {
            let raw_level = resolve_numeric(row, &config.name, &config.level_field);
            let raw_temperature = resolve_numeric(row, &config.name, &config.temp_field);
            let fill_percent = metrics::derive_fill_percent(raw_level, config.capacity);

            DerivedTankReading {
                tank_number: config.id,
                name: config.name.clone(),
                capacity: config.capacity,
                raw_level,
                volume_liters: raw_level,
                raw_temperature,
                temperature: raw_temperature,
                fill_percent,
                level_band: metrics::classify_level(fill_percent),
                temp_band: metrics::classify_temperature(raw_temperature),
                air_pressure,
            }
        })
        .collect();

    let totals = metrics::aggregate(&tanks);

    AggregateSnapshot {
        tanks,
        air_pressure,
        total_capacity: totals.total_capacity,
        total_utilized_volume: totals.total_utilized_volume,
        utilization_rate_percent: totals.utilization_rate_percent,
        timestamp: Utc::now(),
    }
}
