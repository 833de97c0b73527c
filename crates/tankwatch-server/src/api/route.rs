//! API routing configuration

use actix_web::{Scope, web};

use super::{health, tank_config, tanks};

/// Create the /api routes
///
/// Routes:
/// - GET /api/tanks - current aggregate snapshot
/// - GET /api/tanks/config - list tank configurations
/// - POST /api/tanks/config - create tank configuration
/// - PUT /api/tanks/config/{id} - update tank configuration
/// - DELETE /api/tanks/config/{id} - delete tank configuration
/// - GET /api/health - liveness and store reachability
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(
            web::scope("/tanks")
                .service(
                    web::scope("/config")
                        .service(tank_config::list_configs)
                        .service(tank_config::create_config)
                        .service(tank_config::update_config)
                        .service(tank_config::delete_config),
                )
                .service(tanks::get_tanks),
        )
        .service(health::health)
}
