//! Utility module
//!
//! - [`AppError`] - application error type with HTTP status mapping
//! - [`logger`] - tracing setup
//! - [`validation`] - input validation helpers

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
