//! Tank configuration CRUD endpoints

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use tankwatch_telemetry::service::tank_config as tank_config_service;

use crate::api;
use crate::api::model::{
    CreatedResponse, ErrorBody, SuccessResponse, TankConfigItem, TankConfigPayload,
};
use crate::model::common::AppState;

/// Reject inputs the derivation layer cannot do anything sensible with.
/// Field names stay unchecked against the producer schema on purpose: the
/// column set can change underneath us and a stale mapping just resolves
/// to 0.
fn validate(payload: &TankConfigPayload) -> Result<(), String> {
    if payload.name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if payload.capacity <= 0 {
        return Err("capacity must be a positive number of liters".to_string());
    }
    Ok(())
}

/// GET /api/tanks/config
#[get("")]
pub(crate) async fn list_configs(data: web::Data<AppState>) -> impl Responder {
    match tank_config_service::find_all(data.db()).await {
        Ok(configs) => {
            let items: Vec<TankConfigItem> =
                configs.into_iter().map(TankConfigItem::from).collect();
            HttpResponse::Ok().json(items)
        }
        Err(err) => api::error_response(err),
    }
}

/// POST /api/tanks/config
#[post("")]
pub(crate) async fn create_config(
    data: web::Data<AppState>,
    payload: web::Json<TankConfigPayload>,
) -> impl Responder {
    if let Err(msg) = validate(&payload) {
        return HttpResponse::BadRequest().json(ErrorBody::new(msg));
    }

    match tank_config_service::create(
        data.db(),
        payload.name.trim(),
        payload.capacity,
        &payload.level_field,
        &payload.temp_field,
    )
    .await
    {
        Ok(id) => HttpResponse::Ok().json(CreatedResponse::new(id)),
        Err(err) => api::error_response(err),
    }
}

/// PUT /api/tanks/config/{id}
#[put("/{id}")]
pub(crate) async fn update_config(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<TankConfigPayload>,
) -> impl Responder {
    let id = path.into_inner();

    if let Err(msg) = validate(&payload) {
        return HttpResponse::BadRequest().json(ErrorBody::new(msg));
    }

    match tank_config_service::update(
        data.db(),
        id,
        payload.name.trim(),
        payload.capacity,
        &payload.level_field,
        &payload.temp_field,
    )
    .await
    {
        Ok(true) => HttpResponse::Ok().json(SuccessResponse::ok()),
        Ok(false) => HttpResponse::NotFound()
            .json(ErrorBody::new(format!("tank configuration {} not found", id))),
        Err(err) => api::error_response(err),
    }
}

/// DELETE /api/tanks/config/{id}
#[delete("/{id}")]
pub(crate) async fn delete_config(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();

    match tank_config_service::delete(data.db(), id).await {
        Ok(true) => HttpResponse::Ok().json(SuccessResponse::ok()),
        Ok(false) => HttpResponse::NotFound()
            .json(ErrorBody::new(format!("tank configuration {} not found", id))),
        Err(err) => api::error_response(err),
    }
}
