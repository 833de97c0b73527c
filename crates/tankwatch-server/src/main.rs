//! Main entry point for the Tankwatch telemetry server.
//!
//! This file sets up logging, the database connection pool, and the HTTP
//! server exposing the snapshot and config endpoints.

use actix_web::{App, HttpServer, middleware::Logger, web};
use tracing::info;

use tankwatch_persistence::schema;
use tankwatch_server::{
    api,
    model::{common::AppState, config::Configuration},
    startup,
};
use tankwatch_telemetry::service::tank_config as tank_config_service;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize configuration and logging
    let configuration = Configuration::new();
    let _logging_guard = startup::init_logging()?;

    info!("tankwatch {} starting", env!("CARGO_PKG_VERSION"));

    let database_connection = configuration.database_connection().await?;
    info!("Connected to database");

    schema::ensure_schema(&database_connection).await?;

    if configuration.provision_default_tanks() {
        let seeded = tank_config_service::provision_default_tanks(&database_connection).await?;
        if seeded > 0 {
            info!("Provisioned {} default tank configurations", seeded);
        }
    }

    let address = configuration.server_address();
    let port = configuration.server_port();
    let state = AppState::new(configuration, database_connection);

    info!("Listening on {}:{}", address, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .service(api::route::api_routes())
    })
    .bind((address, port))?
    .run()
    .await?;

    Ok(())
}
