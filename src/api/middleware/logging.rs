//! Innermost stage: request logging.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs method, path, final status and latency once routing has completed.
///
/// The inner chain runs first so the logged status is the one sent to the
/// client. Requests rejected by an outer stage are not logged here.
pub async fn layer(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}
