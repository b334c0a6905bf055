//! Delivery Tracker Server
//!
//! HTTP service tracking parcel deliveries through their lifecycle
//! (pending → processing → delivered) with an append-only audit trail
//! of delivery logs.
//!
//! # Module structure
//!
//! ```text
//! delivery-server/src/
//! ├── core/        # Config, state, HTTP server bootstrap
//! ├── auth/        # JWT authentication, role middleware
//! ├── deliveries/  # Lifecycle rules, access policy, log service
//! ├── api/         # HTTP routes and handlers
//! ├── db/          # SQLite pool, migrations, repositories
//! └── utils/       # Errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod deliveries;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use deliveries::{Actor, DeliveryLogService, ServiceError};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
