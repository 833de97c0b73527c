//! Request and response models for the Tankwatch HTTP API
//!
//! Mutation bodies use camelCase (`levelField`); the config listing keeps
//! the snake_case column names (`level_field`) the admin screens already
//! bind to. Both shapes are published contracts.

use serde::{Deserialize, Serialize};

use tankwatch_persistence::entity::tank_config;

/// Body for POST and PUT /api/tanks/config
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankConfigPayload {
    pub name: String,
    pub capacity: i64,
    pub level_field: String,
    pub temp_field: String,
}

/// Item shape for GET /api/tanks/config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankConfigItem {
    pub id: i64,
    pub name: String,
    pub capacity: i64,
    pub level_field: String,
    pub temp_field: String,
}

impl From<tank_config::Model> for TankConfigItem {
    fn from(model: tank_config::Model) -> Self {
        TankConfigItem {
            id: model.id,
            name: model.name,
            capacity: model.capacity,
            level_field: model.level_field,
            temp_field: model.temp_field,
        }
    }
}

/// `{success: true, id}` returned on creation
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        CreatedResponse { success: true, id }
    }
}

/// `{success: true}` returned on update and delete
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        SuccessResponse { success: true }
    }
}

/// Error body `{"error": …}`, the shape the dashboard's fetch loop parses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            error: message.into(),
        }
    }
}
