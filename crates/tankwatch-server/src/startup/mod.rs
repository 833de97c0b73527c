//! Application startup utilities

pub mod logging;

pub use logging::{LoggingGuard, init_logging};
