//! End-to-end service tests against an in-memory SQLite database.
//!
//! These exercise the real SeaORM code paths: config store CRUD, latest-row
//! access through the dynamic JSON query, and full snapshot assembly.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use tankwatch_common::TankwatchError;
use tankwatch_persistence::schema;
use tankwatch_telemetry::service::{snapshot, tank_config, telemetry};
use tankwatch_telemetry::{LevelBand, TelemetrySource, TempBand};

async fn test_db() -> DatabaseConnection {
    // A single pooled connection keeps the in-memory database alive and
    // visible across queries.
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1);
    let db = Database::connect(opt).await.expect("sqlite connect failed");
    schema::ensure_schema(&db).await.expect("schema bootstrap failed");
    db
}

async fn execute(db: &DatabaseConnection, sql: &str) {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        sql.to_string(),
    ))
    .await
    .unwrap_or_else(|e| panic!("statement failed: {} ({})", sql, e));
}

async fn create_telemetry_table(db: &DatabaseConnection) {
    execute(
        db,
        "CREATE TABLE tank_data (id INTEGER PRIMARY KEY AUTOINCREMENT, \
         DATA0 REAL, DATA1 REAL, DATA7 REAL, DATA8 REAL, DATA12 REAL)",
    )
    .await;
}

fn source() -> TelemetrySource {
    TelemetrySource {
        table: "tank_data".to_string(),
        air_pressure_field: "DATA12".to_string(),
    }
}

#[tokio::test]
async fn test_crud_round_trip() {
    let db = test_db().await;

    let id = tank_config::create(&db, "T1", 1000, "DATA0", "DATA7")
        .await
        .unwrap();

    let listed = tank_config::find_all(&db).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].name, "T1");
    assert_eq!(listed[0].capacity, 1000);
    assert_eq!(listed[0].level_field, "DATA0");
    assert_eq!(listed[0].temp_field, "DATA7");

    let updated = tank_config::update(&db, id, "T1 renamed", 2000, "DATA1", "DATA8")
        .await
        .unwrap();
    assert!(updated);

    let fetched = tank_config::get_by_id(&db, id).await.unwrap();
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.name, "T1 renamed");
    assert_eq!(fetched.capacity, 2000);

    let deleted = tank_config::delete(&db, id).await.unwrap();
    assert!(deleted);

    let err = tank_config::get_by_id(&db, id).await.unwrap_err();
    match err.downcast_ref::<TankwatchError>() {
        Some(TankwatchError::TankConfigNotFound(missing)) => assert_eq!(*missing, id),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_ids_are_unique_and_never_reused() {
    let db = test_db().await;

    let first = tank_config::create(&db, "T1", 1000, "DATA0", "DATA7")
        .await
        .unwrap();
    let second = tank_config::create(&db, "T2", 1000, "DATA1", "DATA8")
        .await
        .unwrap();
    assert_ne!(first, second);

    // sqlite AUTOINCREMENT, like the production AUTO_INCREMENT column,
    // never hands a deleted id back out
    tank_config::delete(&db, second).await.unwrap();
    let third = tank_config::create(&db, "T3", 1000, "DATA2", "DATA9")
        .await
        .unwrap();
    assert!(third > second);
}

#[tokio::test]
async fn test_update_unknown_id_reports_not_found() {
    let db = test_db().await;

    let updated = tank_config::update(&db, 999, "ghost", 1, "DATA0", "DATA7")
        .await
        .unwrap();
    assert!(!updated);

    let deleted = tank_config::delete(&db, 999).await.unwrap();
    assert!(!deleted);
}

#[tokio::test]
async fn test_latest_row_wins() {
    let db = test_db().await;
    create_telemetry_table(&db).await;

    execute(
        &db,
        "INSERT INTO tank_data (DATA0, DATA7, DATA12) VALUES (1000, 15, 990)",
    )
    .await;
    execute(
        &db,
        "INSERT INTO tank_data (DATA0, DATA7, DATA12) VALUES (4000, 22, 1013)",
    )
    .await;

    let row = telemetry::latest_row(&db, "tank_data")
        .await
        .unwrap()
        .expect("expected a row");
    assert_eq!(row.lookup_numeric("DATA0"), Some(4000.0));
    assert_eq!(row.lookup_numeric("DATA12"), Some(1013.0));
}

#[tokio::test]
async fn test_empty_telemetry_table_yields_none() {
    let db = test_db().await;
    create_telemetry_table(&db).await;

    let row = telemetry::latest_row(&db, "tank_data").await.unwrap();
    assert!(row.is_none());
}

#[tokio::test]
async fn test_assemble_worked_example() {
    let db = test_db().await;
    create_telemetry_table(&db).await;

    tank_config::create(&db, "Tank A", 20_000, "DATA0", "DATA7")
        .await
        .unwrap();
    execute(
        &db,
        "INSERT INTO tank_data (DATA0, DATA7, DATA12) VALUES (4000, 22, 1013)",
    )
    .await;

    let snapshot = snapshot::assemble(&db, &source()).await.unwrap();

    assert_eq!(snapshot.tanks.len(), 1);
    let tank = &snapshot.tanks[0];
    assert_eq!(tank.name, "Tank A");
    assert_eq!(tank.raw_level, 4000.0);
    assert_eq!(tank.raw_temperature, 22.0);
    assert_eq!(tank.fill_percent, 20);
    assert_eq!(tank.level_band, LevelBand::Medium);
    assert_eq!(tank.temp_band, TempBand::Normal);
    assert_eq!(snapshot.air_pressure, Some(1013.0));
    assert_eq!(snapshot.utilization_rate_percent, 20.0);
}

#[tokio::test]
async fn test_assemble_without_telemetry_reports_no_data() {
    let db = test_db().await;
    create_telemetry_table(&db).await;

    tank_config::create(&db, "Tank A", 20_000, "DATA0", "DATA7")
        .await
        .unwrap();

    let err = snapshot::assemble(&db, &source()).await.unwrap_err();
    match err.downcast_ref::<TankwatchError>() {
        Some(TankwatchError::NoTelemetryData) => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_assemble_is_idempotent() {
    let db = test_db().await;
    create_telemetry_table(&db).await;

    tank_config::create(&db, "Tank A", 20_000, "DATA0", "DATA7")
        .await
        .unwrap();
    tank_config::create(&db, "Tank B", 10_000, "DATA1", "DATA8")
        .await
        .unwrap();
    execute(
        &db,
        "INSERT INTO tank_data (DATA0, DATA1, DATA7, DATA8, DATA12) \
         VALUES (4000, 2500, 22, 19, 1013)",
    )
    .await;

    let first = snapshot::assemble(&db, &source()).await.unwrap();
    let second = snapshot::assemble(&db, &source()).await.unwrap();

    assert_eq!(first.tanks, second.tanks);
    assert_eq!(first.air_pressure, second.air_pressure);
    assert_eq!(first.total_capacity, second.total_capacity);
    assert_eq!(first.total_utilized_volume, second.total_utilized_volume);
}

#[tokio::test]
async fn test_provision_default_tanks_once() {
    let db = test_db().await;

    let seeded = tank_config::provision_default_tanks(&db).await.unwrap();
    assert_eq!(seeded, 6);

    let configs = tank_config::find_all(&db).await.unwrap();
    assert_eq!(configs.len(), 6);
    assert_eq!(configs[0].name, "Tank 1");
    assert_eq!(configs[0].level_field, "DATA0");
    assert_eq!(configs[0].temp_field, "DATA7");
    // the sixth tank has no temperature probe
    assert_eq!(configs[5].level_field, "DATA5");
    assert_eq!(configs[5].temp_field, "");

    // a second pass is a no-op
    let seeded_again = tank_config::provision_default_tanks(&db).await.unwrap();
    assert_eq!(seeded_again, 0);
    assert_eq!(tank_config::find_all(&db).await.unwrap().len(), 6);
}
