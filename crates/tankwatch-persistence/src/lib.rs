//! Tankwatch Persistence - database entities and schema bootstrap
//!
//! This crate provides:
//! - SeaORM entity definitions for the config store
//! - Idempotent schema creation for first boot

pub mod entity;
pub mod schema;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;
