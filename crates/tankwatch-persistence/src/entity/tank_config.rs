//! `SeaORM` Entity for tank_config table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tank_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Operator-facing display label
    pub name: String,
    /// Tank capacity in liters
    pub capacity: i64,
    /// Column of the raw telemetry row holding this tank's level reading
    pub level_field: String,
    /// Column of the raw telemetry row holding this tank's temperature reading
    pub temp_field: String,
    pub gmt_create: DateTimeUtc,
    pub gmt_modified: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
