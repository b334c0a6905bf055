//! API payloads shared between server and clients
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::Role;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Authenticated user information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

// =============================================================================
// User API DTOs
// =============================================================================

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Delivery API DTOs
// =============================================================================

/// Create delivery payload (operator only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryCreate {
    /// Owning customer
    pub user_id: String,
    pub description: String,
}

/// Status update payload. The status arrives as a string and is parsed
/// into the closed [`DeliveryStatus`] enum at the handler boundary, so
/// unknown values are rejected before any business rule runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryStatusUpdate {
    pub status: String,
}

/// Append log payload; the delivery id comes from the route path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryLogCreate {
    pub description: String,
}

/// Plain acknowledgment body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
