//! # API Error Translation
//!
//! The one place where domain errors become HTTP responses. Every handler
//! and the auth gate return [`ApiError`]; internal failures are logged
//! server-side and degraded to a generic envelope so no internals reach
//! the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::auth::AuthError;
use crate::gadget::GadgetError;
use crate::observability::Logger;

/// Envelope returned on every failure
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// An error ready to be rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Generic 500 envelope; the real cause must already be logged
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "internal server error".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<GadgetError> for ApiError {
    fn from(err: GadgetError) -> Self {
        if err.is_client_error() {
            Self {
                status: StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message: err.to_string(),
            }
        } else {
            Logger::error("GADGET_OPERATION_FAILED", &[("detail", &err.to_string())]);
            Self::internal()
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        if err.is_client_error() {
            Self {
                status: StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message: err.to_string(),
            }
        } else {
            Logger::error("AUTH_OPERATION_FAILED", &[("detail", &err.to_string())]);
            Self::internal()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageResponse {
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
