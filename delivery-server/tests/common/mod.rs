//! Shared fixtures for integration tests

#![allow(dead_code)]

use delivery_server::auth::{JwtConfig, hash_password};
use delivery_server::db::DbService;
use delivery_server::db::repository::user;
use delivery_server::{Config, ServerState};
use shared::models::{Role, User};

pub const TEST_PASSWORD: &str = "Gu@12345678";

/// Server state over a fresh in-memory database with migrations applied
pub async fn test_state() -> ServerState {
    let db = DbService::in_memory().await.expect("in-memory database");
    let config = Config {
        database_path: ":memory:".to_string(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-integration-test".to_string(),
            expiration_minutes: 60,
            issuer: "delivery-server".to_string(),
        },
        environment: "test".to_string(),
    };
    ServerState::with_pool(config, db.pool)
}

/// Insert a user with the shared test password
pub async fn seed_user(state: &ServerState, name: &str, email: &str, role: Role) -> User {
    let hash = hash_password(TEST_PASSWORD).expect("password hash");
    user::create(&state.pool, name, email, &hash, role)
        .await
        .expect("seed user")
}
