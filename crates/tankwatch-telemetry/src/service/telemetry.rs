//! Latest-row access into the producer's telemetry table
//!
//! The producer appends wide rows with opaque column names; only the most
//! recently inserted row (by primary key order) is ever read. Columns are
//! not known at compile time, so the row is fetched as JSON and wrapped in
//! `TelemetryRow`.

use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, JsonValue, Statement};

use tankwatch_common::{TankwatchError, is_safe_identifier};

use crate::row::TelemetryRow;

/// Fetch the single current raw row, or `None` when the producer has not
/// written yet.
pub async fn latest_row(
    db: &DatabaseConnection,
    table: &str,
) -> anyhow::Result<Option<TelemetryRow>> {
    // The table name is operator-configured and interpolated into SQL; it
    // must be a bare identifier.
    if !is_safe_identifier(table) {
        return Err(
            TankwatchError::Validation(format!("illegal telemetry table name: {}", table)).into(),
        );
    }

    let stmt = Statement::from_string(
        db.get_database_backend(),
        format!("SELECT * FROM {} ORDER BY id DESC LIMIT 1", table),
    );

    let row = JsonValue::find_by_statement(stmt)
        .one(db)
        .await
        .map_err(|e| TankwatchError::Database(e.to_string()))?;

    Ok(row.map(TelemetryRow::from))
}
