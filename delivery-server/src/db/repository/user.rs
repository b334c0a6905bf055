//! User Repository

use sqlx::SqlitePool;

use shared::models::{Role, User, UserSummary};
use shared::util::{new_id, now_millis};

use super::{RepoError, RepoResult};

const USER_SELECT: &str =
    "SELECT id, name, email, password_hash, role, created_at, updated_at FROM users";

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE id = ?");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE email = ? LIMIT 1");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_summary_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<UserSummary>> {
    let summary =
        sqlx::query_as::<_, UserSummary>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(summary)
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: Role,
) -> RepoResult<User> {
    // Check duplicate email first for a clean message; the UNIQUE
    // constraint still backs this up under races.
    if find_by_email(pool, email).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "User with email '{email}' already exists"
        )));
    }

    let id = new_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
    )
    .bind(&id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
}
