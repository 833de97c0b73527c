//! Field mapping resolution
//!
//! A tank definition names the columns its readings come from. A missing or
//! malformed column is tolerated and defaults to 0, so a producer schema
//! change or a transiently null column never breaks the whole snapshot. The
//! fallback is logged for operators, never raised as an error.

use tracing::warn;

use crate::row::TelemetryRow;

pub const DEFAULT_READING: f64 = 0.0;

/// Resolve `field` against `row`, defaulting to 0 when absent or
/// non-numeric.
pub fn resolve_numeric(row: &TelemetryRow, tank_name: &str, field: &str) -> f64 {
    match row.lookup_numeric(field) {
        Some(value) => value,
        None => {
            warn!(
                tank = tank_name,
                field = field,
                "telemetry field missing or non-numeric, defaulting to 0"
            );
            DEFAULT_READING
        }
    }
}
