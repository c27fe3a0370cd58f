//! Outermost stage: containment of unhandled failures.

use axum::{extract::Request, middleware::Next, response::Response};
use tokio::task::JoinError;
use uuid::Uuid;

use crate::error::{Fault, fault_response};

/// Runs the inner chain and turns any fault into a `500 Internal Server Error`.
///
/// Two kinds of fault are contained:
/// - a panic anywhere inside the chain (the chain runs on its own task, so the
///   panic surfaces as a [`JoinError`])
/// - a response flagged with [`Fault`], produced by [`crate::error::AppError::Internal`]
///
/// Each fault gets a freshly generated correlation id, logged together with the
/// diagnostic detail and returned to the client.
///
/// # Response
///
/// ```json
/// {
///   "error": "Internal server error.",
///   "details": "index out of bounds",
///   "trace_id": "7f1c7d0e-5b1a-4c1e-9a59-2b0e4f7e9a11"
/// }
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let details = match tokio::spawn(next.run(req)).await {
        Ok(response) => {
            let fault = response
                .extensions()
                .get::<Fault>()
                .map(|f| f.details.clone());
            match fault {
                Some(details) => details,
                None => return response,
            }
        }
        Err(err) => describe_join_error(err),
    };

    let trace_id = Uuid::new_v4().to_string();
    tracing::error!(
        method = %method,
        path = %path,
        trace_id = %trace_id,
        details = %details,
        "Unhandled failure while processing request"
    );

    fault_response(details, trace_id)
}

/// Extracts a human-readable message from a failed request task.
fn describe_join_error(err: JoinError) -> String {
    if !err.is_panic() {
        return "Request processing was cancelled".to_string();
    }

    let payload = err.into_panic();
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Request handler panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http, http::StatusCode, middleware, routing::get};
    use tower::ServiceExt;

    use crate::error::AppError;

    async fn panicking() -> &'static str {
        panic!("invariant violated")
    }

    fn app() -> Router {
        Router::new()
            .route("/ok", get(|| async { "fine" }))
            .route("/panic", get(panicking))
            .route(
                "/internal",
                get(|| async { Err::<String, _>(AppError::internal("store unavailable")) }),
            )
            .layer(middleware::from_fn(layer))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_passes_through_successful_responses() {
        let response = app()
            .oneshot(http::Request::get("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_panic_becomes_500_with_details() {
        let response = app()
            .oneshot(http::Request::get("/panic").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal server error.");
        assert_eq!(json["details"], "invariant violated");
        assert!(Uuid::parse_str(json["trace_id"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_internal_error_rendered_once() {
        let response = app()
            .oneshot(http::Request::get("/internal").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<Fault>().is_none());
        let json = body_json(response).await;
        assert_eq!(json["details"], "store unavailable");
    }
}
