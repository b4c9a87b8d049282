//! Common utilities
//!
//! - [`AppError`] / [`AppResult`] - application error type and result alias
//! - [`logger`] - tracing setup
//! - [`password`] - Argon2id hashing

pub mod error;
pub mod logger;
pub mod password;

pub use error::{AppError, AppResult, ErrorBody, set_production};
