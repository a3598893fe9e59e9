//! Error types and error handling for the application
//!
//! This module defines the HTTP-facing error type. Storage errors are wrapped
//! and mapped to status codes by category; every error renders as a JSON body
//! of the form `{"error": ..., "status": ...}`.

use crate::state::{ErrorCategory, StoreError};
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A storage operation failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No route matches the request
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// Request body is missing, not JSON, or has the wrong shape
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Query string could not be parsed
    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    /// Path parameter does not name any entity (e.g. a non-numeric id)
    #[error("Resource not found: {0}")]
    InvalidPath(#[from] PathRejection),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Store(err) => match err.category() {
                ErrorCategory::NotFound => StatusCode::NOT_FOUND,
                ErrorCategory::ValidationFailed => StatusCode::BAD_REQUEST,
                ErrorCategory::Conflict => StatusCode::BAD_REQUEST,
            },
            AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidPath(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = self.to_string();

        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), error = %error_message, "Request rejected");
        }

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
