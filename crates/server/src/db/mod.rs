//! Database module for the Press status service.
//!
//! The service only uses the database for health reporting.

pub mod pool;

pub use pool::{create_pool, DbPool};
