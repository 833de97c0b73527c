//! Configuration and shared application state

pub mod common;
pub mod config;
pub mod constants;
