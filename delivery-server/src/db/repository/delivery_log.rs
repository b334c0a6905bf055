//! Delivery Log Repository
//!
//! Insert and ordered reads only. Logs are immutable: there is no
//! update or delete function here on purpose.

use sqlx::SqlitePool;

use shared::models::DeliveryLog;
use shared::util::{new_id, now_millis};

use super::{RepoError, RepoResult};

/// All logs of a delivery in creation order. The id is the tiebreaker
/// for entries created in the same millisecond.
pub async fn find_for_delivery(pool: &SqlitePool, delivery_id: &str) -> RepoResult<Vec<DeliveryLog>> {
    let logs = sqlx::query_as::<_, DeliveryLog>(
        "SELECT id, delivery_id, description, created_at FROM delivery_logs WHERE delivery_id = ? ORDER BY created_at, id",
    )
    .bind(delivery_id)
    .fetch_all(pool)
    .await?;
    Ok(logs)
}

pub async fn count_for_delivery(pool: &SqlitePool, delivery_id: &str) -> RepoResult<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM delivery_logs WHERE delivery_id = ?")
            .bind(delivery_id)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

pub async fn create(
    pool: &SqlitePool,
    delivery_id: &str,
    description: &str,
) -> RepoResult<DeliveryLog> {
    let id = new_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO delivery_logs (id, delivery_id, description, created_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&id)
    .bind(delivery_id)
    .bind(description)
    .bind(now)
    .execute(pool)
    .await?;

    let log = sqlx::query_as::<_, DeliveryLog>(
        "SELECT id, delivery_id, description, created_at FROM delivery_logs WHERE id = ?",
    )
    .bind(&id)
    .fetch_optional(pool)
    .await?;

    log.ok_or_else(|| RepoError::Database("Failed to create delivery log".to_string()))
}
