//! Session Handlers
//!
//! Credential verification and token issuance.

use std::time::Duration;

use axum::{Json, extract::State};

use shared::client::{LoginRequest, LoginResponse, UserInfo};

use crate::auth::verify_password;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/sessions - authenticate and get an access token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let found = user::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay before checking the result, so lookups and password
    // failures are indistinguishable on the wire
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent email enumeration
    let invalid_credentials = AppError::invalid_credentials;

    let Some(account) = found else {
        tracing::warn!(target: "security", email = %req.email, "Login failed - user not found");
        return Err(invalid_credentials());
    };

    if !verify_password(&req.password, &account.password_hash)? {
        tracing::warn!(target: "security", user_id = %account.id, "Login failed - invalid credentials");
        return Err(invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(&account)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = %account.id, role = %account.role, "Login succeeded");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: account.id,
            name: account.name,
            email: account.email,
            role: account.role,
        },
    }))
}
