//! Tank configuration service layer
//!
//! This module provides database operations for the config store. Input
//! validation lives at the API boundary; this layer owns identity and
//! timestamp assignment.

use sea_orm::*;

use tankwatch_common::TankwatchError;
use tankwatch_persistence::entity::tank_config;

pub const DEFAULT_TANK_COUNT: usize = 6;
pub const DEFAULT_TANK_CAPACITY: i64 = 20_000;

/// Find all tank configurations, ascending id
pub async fn find_all(db: &DatabaseConnection) -> anyhow::Result<Vec<tank_config::Model>> {
    let configs = tank_config::Entity::find()
        .order_by_asc(tank_config::Column::Id)
        .all(db)
        .await?;

    Ok(configs)
}

/// Get a tank configuration by id
pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> anyhow::Result<tank_config::Model> {
    tank_config::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| TankwatchError::TankConfigNotFound(id).into())
}

/// Create a new tank configuration, returning its assigned id
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    capacity: i64,
    level_field: &str,
    temp_field: &str,
) -> anyhow::Result<i64> {
    let now = chrono::Utc::now();
    let entity = tank_config::ActiveModel {
        name: Set(name.to_string()),
        capacity: Set(capacity),
        level_field: Set(level_field.to_string()),
        temp_field: Set(temp_field.to_string()),
        gmt_create: Set(now),
        gmt_modified: Set(now),
        ..Default::default()
    };

    let res = tank_config::Entity::insert(entity).exec(db).await?;

    tracing::debug!(id = res.last_insert_id, name = name, "tank configuration created");

    Ok(res.last_insert_id)
}

/// Update an existing tank configuration
pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    capacity: i64,
    level_field: &str,
    temp_field: &str,
) -> anyhow::Result<bool> {
    if let Some(entity) = tank_config::Entity::find_by_id(id).one(db).await? {
        let mut config: tank_config::ActiveModel = entity.into();

        config.name = Set(name.to_string());
        config.capacity = Set(capacity);
        config.level_field = Set(level_field.to_string());
        config.temp_field = Set(temp_field.to_string());

        if config.is_changed() {
            config.gmt_modified = Set(chrono::Utc::now());
            config.update(db).await?;
        }

        return Ok(true);
    }

    Ok(false)
}

/// Delete a tank configuration
pub async fn delete(db: &DatabaseConnection, id: i64) -> anyhow::Result<bool> {
    let res = tank_config::Entity::delete_by_id(id).exec(db).await?;

    Ok(res.rows_affected > 0)
}

/// Seed the legacy six-tank fleet when the config store is empty.
///
/// Levels come from DATA0..DATA5 and temperatures from DATA7..DATA11; the
/// sixth tank never had a temperature column, so its mapping is left blank
/// and resolves to 0 through the standard missing-field tolerance.
pub async fn provision_default_tanks(db: &DatabaseConnection) -> anyhow::Result<u64> {
    let existing = tank_config::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(0);
    }

    for i in 0..DEFAULT_TANK_COUNT {
        let temp_field = if i < DEFAULT_TANK_COUNT - 1 {
            format!("DATA{}", i + 7)
        } else {
            String::new()
        };
        create(
            db,
            &format!("Tank {}", i + 1),
            DEFAULT_TANK_CAPACITY,
            &format!("DATA{}", i),
            &temp_field,
        )
        .await?;
    }

    tracing::info!(count = DEFAULT_TANK_COUNT, "provisioned default tank configurations");

    Ok(DEFAULT_TANK_COUNT as u64)
}
