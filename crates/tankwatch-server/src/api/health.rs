//! Health endpoint

use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::model::common::AppState;

/// GET /api/health
#[get("/health")]
pub(crate) async fn health(data: web::Data<AppState>) -> impl Responder {
    match data.db().ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({"status": "UP"})),
        Err(err) => {
            tracing::warn!(error = %err, "database ping failed");
            HttpResponse::ServiceUnavailable().json(json!({"status": "DOWN"}))
        }
    }
}
