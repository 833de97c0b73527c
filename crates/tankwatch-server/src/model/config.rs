//! Configuration management for the Tankwatch server
//!
//! This module handles loading and accessing application configuration.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use tankwatch_telemetry::TelemetrySource;

use super::constants::{
    AIR_PRESSURE_FIELD_PROPERTY, DATABASE_URL_PROPERTY, DEFAULT_AIR_PRESSURE_FIELD,
    DEFAULT_SERVER_ADDRESS, DEFAULT_SERVER_PORT, DEFAULT_TELEMETRY_TABLE,
    PROVISION_DEFAULT_TANKS_PROPERTY, SERVER_ADDRESS_PROPERTY, SERVER_PORT_PROPERTY,
    TELEMETRY_TABLE_PROPERTY,
};

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("tankwatch")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("conf/application.yml"));

        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override(SERVER_PORT_PROPERTY, i64::from(v))
                .expect("Failed to set server port override");
        }
        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override(DATABASE_URL_PROPERTY, v)
                .expect("Failed to set database URL override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string(SERVER_ADDRESS_PROPERTY)
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int(SERVER_PORT_PROPERTY)
            .unwrap_or(DEFAULT_SERVER_PORT.into()) as u16
    }

    // ========================================================================
    // Telemetry Source Configuration
    // ========================================================================

    pub fn telemetry_table(&self) -> String {
        self.config
            .get_string(TELEMETRY_TABLE_PROPERTY)
            .unwrap_or(DEFAULT_TELEMETRY_TABLE.to_string())
    }

    pub fn air_pressure_field(&self) -> String {
        self.config
            .get_string(AIR_PRESSURE_FIELD_PROPERTY)
            .unwrap_or(DEFAULT_AIR_PRESSURE_FIELD.to_string())
    }

    pub fn telemetry_source(&self) -> TelemetrySource {
        TelemetrySource {
            table: self.telemetry_table(),
            air_pressure_field: self.air_pressure_field(),
        }
    }

    pub fn provision_default_tanks(&self) -> bool {
        self.config
            .get_bool(PROVISION_DEFAULT_TANKS_PROPERTY)
            .unwrap_or(false)
    }

    // ========================================================================
    // Database Configuration
    // ========================================================================

    pub async fn database_connection(
        &self,
    ) -> std::result::Result<DatabaseConnection, Box<dyn std::error::Error>> {
        let max_connections = self
            .config
            .get_int("db.pool.config.maximumPoolSize")
            .unwrap_or(20) as u32;
        let min_connections = self
            .config
            .get_int("db.pool.config.minimumPoolSize")
            .unwrap_or(1) as u32;
        let connect_timeout = self
            .config
            .get_int("db.pool.config.connectionTimeout")
            .unwrap_or(10) as u64;
        let acquire_timeout = self
            .config
            .get_int("db.pool.config.initializationFailTimeout")
            .unwrap_or(5) as u64;
        let idle_timeout = self
            .config
            .get_int("db.pool.config.idleTimeout")
            .unwrap_or(600) as u64;
        let max_lifetime = self
            .config
            .get_int("db.pool.config.maxLifetime")
            .unwrap_or(1800) as u64;
        let sqlx_logging = self
            .config
            .get_bool("db.pool.config.sqlxLogging")
            .unwrap_or(false);

        let url = self.config.get_string(DATABASE_URL_PROPERTY)?;

        let mut opt = ConnectOptions::new(url);

        // A poll that cannot obtain a connection within the acquire timeout
        // fails fast as a dependency error instead of hanging.
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .max_lifetime(Duration::from_secs(max_lifetime))
            .sqlx_logging(sqlx_logging)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        tracing::info!(
            max_connections = max_connections,
            min_connections = min_connections,
            connect_timeout = connect_timeout,
            idle_timeout = idle_timeout,
            max_lifetime = max_lifetime,
            sqlx_logging = sqlx_logging,
            "Database connection pool configured"
        );

        let database_connection: DatabaseConnection = Database::connect(opt).await?;

        Ok(database_connection)
    }
}
