//! Error types for Tankwatch
//!
//! One enum covers the whole taxonomy the HTTP layer cares about:
//! validation failures map to 400, the two not-found conditions map to 404,
//! and everything reaching the database maps to 500.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum TankwatchError {
    #[error("{0}")]
    Validation(String),

    #[error("tank configuration {0} not found")]
    TankConfigNotFound(i64),

    #[error("No tank data found")]
    NoTelemetryData,

    #[error("database error: {0}")]
    Database(String),
}

impl TankwatchError {
    /// True for the conditions a client can repair by changing its request;
    /// false for dependency failures worth an operator's attention.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TankwatchError::Validation(_)
                | TankwatchError::TankConfigNotFound(_)
                | TankwatchError::NoTelemetryData
        )
    }
}
