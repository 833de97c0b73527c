//! API handlers and models

pub mod health;
pub mod model;
pub mod route;
pub mod tank_config;
pub mod tanks;

use actix_web::HttpResponse;

use tankwatch_common::TankwatchError;

use self::model::ErrorBody;

/// Map a service-layer failure onto the wire.
///
/// Typed domain errors carry their own status; anything else reached the
/// database and surfaces as a 500 with the underlying message for
/// diagnostics.
pub fn error_response(err: anyhow::Error) -> HttpResponse {
    match err.downcast_ref::<TankwatchError>() {
        Some(TankwatchError::Validation(msg)) => {
            HttpResponse::BadRequest().json(ErrorBody::new(msg.clone()))
        }
        Some(TankwatchError::TankConfigNotFound(_)) => {
            HttpResponse::NotFound().json(ErrorBody::new(err.to_string()))
        }
        Some(TankwatchError::NoTelemetryData) => {
            HttpResponse::NotFound().json(ErrorBody::new("No tank data found"))
        }
        Some(TankwatchError::Database(detail)) => {
            tracing::error!(error = %detail, "store operation failed");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new(format!("Database error: {}", detail)))
        }
        _ => {
            tracing::error!(error = %err, "request failed");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new(format!("Database error: {}", err)))
        }
    }
}
