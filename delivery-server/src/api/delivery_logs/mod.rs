//! Delivery Log API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // Deliberately not role-gated: any authenticated actor may append,
    // lifecycle eligibility permitting.
    Router::new().route("/api/deliveries/{delivery_id}/logs", post(handler::create))
}
