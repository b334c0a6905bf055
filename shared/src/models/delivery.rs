//! Delivery Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DeliveryLog, UserSummary};

/// Delivery lifecycle status. Closed enum: unknown strings are rejected
/// at the boundary (serde / FromStr) and never reach business rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum DeliveryStatus {
    Pending,
    Processing,
    Delivered,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Processing => "processing",
            DeliveryStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DeliveryStatus::Pending),
            "processing" => Ok(DeliveryStatus::Processing),
            "delivered" => Ok(DeliveryStatus::Delivered),
            other => Err(format!("Unknown delivery status: {other}")),
        }
    }
}

/// Delivery entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Delivery {
    pub id: String,
    /// Owning customer
    pub user_id: String,
    pub description: String,
    pub status: DeliveryStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Delivery with its full audit trail and owner (detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryWithLogs {
    #[serde(flatten)]
    pub delivery: Delivery,
    /// Chronological, append-only
    pub logs: Vec<DeliveryLog>,
    pub user: UserSummary,
}
