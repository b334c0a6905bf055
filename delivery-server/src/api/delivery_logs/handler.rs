//! Delivery Log API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::client::{DeliveryLogCreate, MessageResponse};
use shared::util::is_uuid;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// POST /api/deliveries/:delivery_id/logs - append to the audit trail
///
/// 404 when the delivery does not exist (unlike the view, which returns
/// null), 400 when the lifecycle forbids the append, with a message
/// naming the blocking status.
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(delivery_id): Path<String>,
    Json(payload): Json<DeliveryLogCreate>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    if !is_uuid(&delivery_id) {
        return Err(AppError::validation("delivery_id must be a UUID"));
    }

    let log = state
        .delivery_logs()
        .append_log(&delivery_id, &payload.description)
        .await?;

    tracing::info!(
        delivery_id = %delivery_id,
        log_id = %log.id,
        actor_id = %current_user.id,
        "Delivery log appended"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Log created successfully".to_string(),
        }),
    ))
}
