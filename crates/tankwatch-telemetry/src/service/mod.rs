//! Service layer: database operations and snapshot assembly

pub mod snapshot;
pub mod tank_config;
pub mod telemetry;
