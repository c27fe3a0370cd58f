//! Request-level error type and its JSON rendering.
//!
//! [`AppError`] is the explicit outcome type returned by services and handlers.
//! Validation, not-found and authentication failures are modeled outcomes and
//! render directly to 4xx responses. [`AppError::Internal`] is a fault: it is
//! never rendered here, only flagged with a [`Fault`] extension so that the
//! error boundary (see [`crate::api::middleware::error_boundary`]) is the single
//! place producing 500 bodies.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Generic message returned for every fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// JSON body shared by all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Marker attached to responses produced from an unhandled failure.
///
/// Carries the diagnostic detail until the error boundary turns it into a body.
#[derive(Debug, Clone)]
pub struct Fault {
    pub details: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the HTTP status this outcome maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Validation { message, details } | AppError::NotFound { message, details } => {
                ErrorBody {
                    error: message,
                    details: Some(details),
                    trace_id: None,
                }
            }
            AppError::Unauthorized { message } => ErrorBody {
                error: message,
                details: None,
                trace_id: None,
            },
            AppError::Internal { message } => {
                let mut response = status.into_response();
                response.extensions_mut().insert(Fault { details: message });
                return response;
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Malformed request body.",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(
            "Invalid path parameter.",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

/// Builds the 500 response for a fault, tagged with a fresh correlation id.
pub fn fault_response(details: String, trace_id: String) -> Response {
    let body = ErrorBody {
        error: INTERNAL_ERROR_MESSAGE.to_string(),
        details: Some(Value::String(details)),
        trace_id: Some(trace_id),
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::unauthorized("nope").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_is_flagged_not_rendered() {
        let response = AppError::internal("store exploded").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let fault = response.extensions().get::<Fault>().unwrap();
        assert_eq!(fault.details, "store exploded");
    }

    #[test]
    fn test_modeled_errors_carry_no_fault() {
        let response = AppError::not_found("User not found.", json!({"id": 7})).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.extensions().get::<Fault>().is_none());
    }

    #[test]
    fn test_error_display_uses_message() {
        let err = AppError::bad_request("Invalid email format.", json!({}));
        assert_eq!(err.to_string(), "Invalid email format.");
    }
}
