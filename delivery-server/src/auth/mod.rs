//! Authentication and authorization
//!
//! - [`JwtService`] - token generation and validation
//! - [`CurrentUser`] - authenticated actor extracted from the request
//! - [`require_auth`] - authentication middleware
//! - [`require_operator`] - role gate for operator-only routes

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_auth, require_operator};
pub use password::{hash_password, verify_password};
