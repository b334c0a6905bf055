//! User API Handlers

use axum::{Json, extract::State, http::StatusCode};

use shared::client::UserCreate;
use shared::models::{Role, User};

use crate::auth::hash_password;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::AppResult;
use crate::utils::validation::{validate_email, validate_name, validate_password};

/// POST /api/users - register a customer account
///
/// Operator accounts are provisioned out of band; self-registration
/// always yields the customer role.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    validate_name(&payload.name)?;
    validate_email(&payload.email)?;
    validate_password(&payload.password)?;

    let password_hash = hash_password(&payload.password)?;
    let created = user::create(
        &state.pool,
        payload.name.trim(),
        &payload.email,
        &password_hash,
        Role::Customer,
    )
    .await?;

    tracing::info!(user_id = %created.id, "User registered");

    // password_hash is #[serde(skip_serializing)], the hash never leaves
    Ok((StatusCode::CREATED, Json(created)))
}
