//! Snapshot endpoint

use actix_web::{HttpResponse, Responder, get, http::header, web};

use tankwatch_telemetry::service::snapshot;

use crate::api;
use crate::model::common::AppState;

/// GET /api/tanks
///
/// Freshness is the entire point of polling, so successful responses carry
/// cache-suppression headers.
#[get("")]
pub(crate) async fn get_tanks(data: web::Data<AppState>) -> impl Responder {
    let source = data.configuration.telemetry_source();

    match snapshot::assemble(data.db(), &source).await {
        Ok(snapshot) => HttpResponse::Ok()
            .insert_header((header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"))
            .insert_header((header::PRAGMA, "no-cache"))
            .json(snapshot),
        Err(err) => api::error_response(err),
    }
}
