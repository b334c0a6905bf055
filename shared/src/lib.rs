//! Shared types for the delivery tracker
//!
//! Entity models and API payloads used by both delivery-server and
//! any client crates. Database derives are feature-gated behind `db`
//! so thin clients do not pull in sqlx.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Delivery, DeliveryLog, DeliveryStatus, DeliveryWithLogs, Role, User};
