//! Delivery API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::client::{DeliveryCreate, DeliveryStatusUpdate};
use shared::models::{Delivery, DeliveryStatus, DeliveryWithLogs};
use shared::util::is_uuid;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{delivery, user};
use crate::deliveries::Actor;
use crate::deliveries::lifecycle;
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

fn parse_delivery_id(id: &str) -> AppResult<()> {
    if !is_uuid(id) {
        return Err(AppError::validation("delivery_id must be a UUID"));
    }
    Ok(())
}

/// POST /api/deliveries - provision a delivery for a customer (operator)
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<DeliveryCreate>,
) -> AppResult<(StatusCode, Json<Delivery>)> {
    validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;
    if !is_uuid(&payload.user_id) {
        return Err(AppError::validation("user_id must be a UUID"));
    }

    let owner = user::find_by_id(&state.pool, &payload.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let created = delivery::create(&state.pool, &owner.id, &payload.description).await?;

    tracing::info!(
        delivery_id = %created.id,
        owner_id = %owner.id,
        operator_id = %current_user.id,
        "Delivery created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/deliveries - list all deliveries (operator)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Delivery>>> {
    let deliveries = delivery::find_all(&state.pool).await?;
    Ok(Json(deliveries))
}

/// GET /api/deliveries/:id - delivery with its logs and owner
///
/// An absent delivery is a 200 with a null body, not a 404; only the
/// access policy can reject this read.
pub async fn show(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Option<DeliveryWithLogs>>> {
    parse_delivery_id(&id)?;

    let actor = Actor::from(&current_user);
    let view = state.delivery_logs().view_delivery(&actor, &id).await?;
    Ok(Json(view))
}

/// PATCH /api/deliveries/:id/status - advance the lifecycle (operator)
///
/// Transitions are forward-only; the payload status is parsed against
/// the closed enum before any rule runs.
pub async fn update_status(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<DeliveryStatusUpdate>,
) -> AppResult<Json<Delivery>> {
    parse_delivery_id(&id)?;

    let next: DeliveryStatus = payload
        .status
        .parse()
        .map_err(AppError::validation)?;

    let current = delivery::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Delivery not found"))?;

    if !lifecycle::can_transition(current.status, next) {
        return Err(AppError::business_rule(format!(
            "Cannot change status from {} to {}",
            current.status, next
        )));
    }

    let updated = delivery::update_status(&state.pool, &id, next).await?;

    tracing::info!(
        delivery_id = %updated.id,
        from = %current.status,
        to = %updated.status,
        operator_id = %current_user.id,
        "Delivery status updated"
    );

    Ok(Json(updated))
}
