//! Request pipeline stages.
//!
//! Every stage has the same shape, `async fn(Request, Next) -> Response`, and
//! is composed in a fixed order by [`crate::api::pipeline`]:
//!
//! 1. [`error_boundary`] - converts unhandled failures into 500 responses
//! 2. [`auth`] - rejects requests without an `Authorization` header
//! 3. [`logging`] - logs method, path and final status

pub mod auth;
pub mod error_boundary;
pub mod logging;
