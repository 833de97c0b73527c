// Main library module for Tankwatch - a configuration-driven tank telemetry server

// Module declarations
pub mod api; // API handlers and models
pub mod model; // Configuration and shared application state
pub mod startup; // Application startup utilities
