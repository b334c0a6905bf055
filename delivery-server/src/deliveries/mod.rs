//! Delivery domain core
//!
//! The one place where lifecycle rules, access control and
//! orchestration compose:
//!
//! - [`lifecycle`] - the status state machine and log-append eligibility
//! - [`policy`] - who may read a delivery's history
//! - [`service`] - the two public operations (append log, view delivery)
//!   over an abstract [`DeliveryStore`]

pub mod lifecycle;
pub mod policy;
pub mod service;

pub use policy::Actor;
pub use service::{DeliveryLogService, DeliveryStore, ServiceError, SqliteDeliveryStore};
