//! Tankwatch Telemetry - configuration-driven snapshot derivation
//!
//! This crate maps an admin-editable set of tank definitions onto the single
//! most-recent raw sensor row and derives a bounded, unit-consistent
//! snapshot:
//! - `row`: the opaque raw telemetry row with dynamic column lookup
//! - `resolve`: field mapping resolution with missing-field tolerance
//! - `metrics`: fill percentage, classification bands, fleet aggregates
//! - `service`: config store CRUD, latest-row access, snapshot assembly

pub mod metrics;
pub mod model;
pub mod resolve;
pub mod row;
pub mod service;

pub use model::{AggregateSnapshot, DerivedTankReading, LevelBand, TempBand};
pub use row::TelemetryRow;
pub use service::snapshot::TelemetrySource;
