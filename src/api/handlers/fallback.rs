//! Handler for requests that match no route or no method.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Answers unknown paths and unsupported methods with `404 Not Found`.
///
/// Both cases share the JSON error body used by the user endpoints.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::not_found(
        "Resource not found.",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
