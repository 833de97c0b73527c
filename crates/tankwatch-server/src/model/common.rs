//! Shared application state

use sea_orm::DatabaseConnection;

use super::config::Configuration;

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub configuration: Configuration,
    pub database_connection: DatabaseConnection,
}

impl AppState {
    pub fn new(configuration: Configuration, database_connection: DatabaseConnection) -> Self {
        AppState {
            configuration,
            database_connection,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.database_connection
    }
}
