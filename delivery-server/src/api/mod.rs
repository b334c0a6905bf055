//! API routing module
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`users`] - registration
//! - [`sessions`] - login
//! - [`deliveries`] - delivery provisioning, listing, status, detail view
//! - [`delivery_logs`] - audit-trail append

pub mod deliveries;
pub mod delivery_logs;
pub mod health;
pub mod sessions;
pub mod users;
