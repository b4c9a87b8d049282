//! Shared types for the Pizza Galaxy platform
//!
//! Domain models, create/update payloads and the price quoting logic used
//! by both galaxy-server and galaxy-client. Database derives are gated
//! behind the `db` feature so the client builds without sqlx.

pub mod models;
pub mod pricing;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
