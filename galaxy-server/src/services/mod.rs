//! Service layer
//!
//! - [`ImageStore`] - uploaded image storage

pub mod storage;

pub use storage::ImageStore;
