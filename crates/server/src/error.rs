//! Error types for the Press status service.
//!
//! This module provides custom error types that implement `IntoResponse`
//! for seamless integration with Axum handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use press_workflow::MarkupError;
use serde_json::json;
use thiserror::Error;

/// Application-level errors for the status service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Not found error
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Status card markup error
    #[error(transparent)]
    Markup(#[from] MarkupError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Markup(e) => {
                tracing::error!(error = %e, "Markup error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = AppError::NotFound("/api/nothing".to_string());
        assert_eq!(err.to_string(), "Resource not found: /api/nothing");
    }

    #[test]
    fn test_not_found_response_status() {
        let response = AppError::NotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_markup_error_is_internal() {
        let source = minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, "bad card");
        let response = AppError::Markup(MarkupError::from(source)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
