//! Data models
//!
//! Shared between galaxy-server and the storefront (via API), so the wire
//! format is camelCase. DB row types use
//! `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`; relation fields
//! populated by application code carry `sqlx(skip)`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod admin_user;
pub mod category;
pub mod contact;
pub mod customer;
pub mod feedback;
pub mod menu_item;
pub mod offer;
pub mod order;

// Re-exports
pub use admin_user::*;
pub use category::*;
pub use contact::*;
pub use customer::*;
pub use feedback::*;
pub use menu_item::*;
pub use offer::*;
pub use order::*;
