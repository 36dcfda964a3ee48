//! Press Status Service Library
//!
//! Serves the article review workflow display model to the admin and
//! frontend apps:
//!
//! - [`config`]: Configuration loading from environment variables
//! - [`db`]: Lazily-connected PostgreSQL pool (health checks)
//! - [`error`]: Error types with Axum integration
//! - [`handlers`]: HTTP route handlers
//! - [`router`]: Route table
//! - [`state`]: Shared application state

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod result_ext;
pub mod router;
pub mod state;

pub use error::{AppError, AppResult};
pub use result_ext::ResultExt;
pub use router::build_router;
