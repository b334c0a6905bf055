//! Delivery API module

mod handler;

use axum::{Router, middleware, routing::get, routing::patch, routing::post};

use crate::auth::require_operator;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // Provisioning, fleet listing and status transitions are operator
    // territory; the detail view is open to any authenticated actor
    // (the access policy decides per delivery).
    let operator_routes = Router::new()
        .route("/api/deliveries", post(handler::create).get(handler::list))
        .route("/api/deliveries/{id}/status", patch(handler::update_status))
        .layer(middleware::from_fn(require_operator));

    let view_routes = Router::new().route("/api/deliveries/{id}", get(handler::show));

    operator_routes.merge(view_routes)
}
