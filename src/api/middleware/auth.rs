//! Authorization header gate.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Message returned when the credential header is absent.
pub const MISSING_TOKEN_MESSAGE: &str = "Unauthorized. Token is missing.";

/// Rejects requests that carry no `Authorization` header.
///
/// Only the presence of a non-blank value is checked; the credential itself
/// is not parsed or verified.
///
/// # Errors
///
/// Responds with `401 Unauthorized` and `{"error": "Unauthorized. Token is missing."}`
/// without running any inner stage.
pub async fn layer(req: Request, next: Next) -> Response {
    if !has_credentials(&req) {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            "Rejected request without Authorization header"
        );
        return AppError::unauthorized(MISSING_TOKEN_MESSAGE).into_response();
    }

    next.run(req).await
}

fn has_credentials(req: &Request) -> bool {
    req.headers()
        .get(header::AUTHORIZATION)
        .is_some_and(|value| !value.as_bytes().trim_ascii().is_empty())
}
