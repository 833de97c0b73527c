//! The opaque raw telemetry row
//!
//! The producer's column set is admin-configurable, so the row is an
//! explicit mapping with dynamic lookup rather than a static struct. Rows
//! are read-only once fetched; the core never writes them back.

use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TelemetryRow {
    columns: Map<String, Value>,
}

impl TelemetryRow {
    pub fn new(columns: Map<String, Value>) -> Self {
        TelemetryRow { columns }
    }

    /// Typed numeric lookup.
    ///
    /// Returns `None` when the column is absent, null, or non-numeric.
    /// Numeric strings are coerced, since some drivers hand DECIMAL columns
    /// back as strings.
    pub fn lookup_numeric(&self, name: &str) -> Option<f64> {
        match self.columns.get(name) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl From<Value> for TelemetryRow {
    /// Rows come off the wire as JSON objects; anything else collapses to an
    /// empty row, which downstream code treats as all-columns-absent.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => TelemetryRow { columns: map },
            _ => TelemetryRow::default(),
        }
    }
}
