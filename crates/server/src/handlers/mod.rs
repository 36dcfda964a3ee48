//! HTTP handlers for the Press status service.

pub mod health;
pub mod workflow;

use axum::http::Uri;

use crate::error::AppError;

pub use health::{api_health, health_check};

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
