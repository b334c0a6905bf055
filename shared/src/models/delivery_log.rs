//! Delivery Log Model

use serde::{Deserialize, Serialize};

/// A single audit-trail entry. Immutable once created: there is no
/// update or delete path anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DeliveryLog {
    pub id: String,
    /// Owning delivery, never reassigned
    pub delivery_id: String,
    pub description: String,
    /// Ordering key for the audit trail
    pub created_at: i64,
}
