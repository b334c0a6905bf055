//! Entity models
//!
//! Plain serde structs mirroring the database schema. sqlx derives are
//! enabled through the `db` feature.

pub mod delivery;
pub mod delivery_log;
pub mod user;

pub use delivery::{Delivery, DeliveryStatus, DeliveryWithLogs};
pub use delivery_log::DeliveryLog;
pub use user::{Role, User, UserSummary};
