//! Delivery Repository

use sqlx::SqlitePool;

use shared::models::{Delivery, DeliveryStatus, DeliveryWithLogs};
use shared::util::{new_id, now_millis};

use super::{RepoError, RepoResult, delivery_log, user};

const DELIVERY_SELECT: &str =
    "SELECT id, user_id, description, status, created_at, updated_at FROM deliveries";

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Delivery>> {
    let sql = format!("{DELIVERY_SELECT} WHERE id = ?");
    let delivery = sqlx::query_as::<_, Delivery>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(delivery)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Delivery>> {
    let sql = format!("{DELIVERY_SELECT} ORDER BY created_at DESC");
    let deliveries = sqlx::query_as::<_, Delivery>(&sql).fetch_all(pool).await?;
    Ok(deliveries)
}

/// Detail view: the delivery plus its ordered audit trail and owner.
pub async fn find_with_logs_and_owner(
    pool: &SqlitePool,
    id: &str,
) -> RepoResult<Option<DeliveryWithLogs>> {
    let Some(delivery) = find_by_id(pool, id).await? else {
        return Ok(None);
    };

    let logs = delivery_log::find_for_delivery(pool, id).await?;
    let owner = user::find_summary_by_id(pool, &delivery.user_id)
        .await?
        .ok_or_else(|| {
            RepoError::Database(format!("Delivery {id} references missing owner"))
        })?;

    Ok(Some(DeliveryWithLogs {
        delivery,
        logs,
        user: owner,
    }))
}

pub async fn create(pool: &SqlitePool, user_id: &str, description: &str) -> RepoResult<Delivery> {
    let id = new_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO deliveries (id, user_id, description, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )
    .bind(&id)
    .bind(user_id)
    .bind(description)
    .bind(DeliveryStatus::Pending)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create delivery".to_string()))
}

pub async fn update_status(
    pool: &SqlitePool,
    id: &str,
    status: DeliveryStatus,
) -> RepoResult<Delivery> {
    let now = now_millis();
    let rows = sqlx::query("UPDATE deliveries SET status = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(status)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Delivery {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Delivery {id} not found")))
}
