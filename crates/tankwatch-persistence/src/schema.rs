//! Idempotent schema bootstrap for the config store
//!
//! The telemetry table itself belongs to the producer and is never created
//! here; only the tables this application owns are bootstrapped.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::tank_config;

/// Create the application-owned tables if they do not exist yet.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut stmt = schema.create_table_from_entity(tank_config::Entity);
    stmt.if_not_exists();
    db.execute(builder.build(&stmt)).await?;

    Ok(())
}
