//! Fixed composition of the request pipeline.
//!
//! The stages are listed outermost first. A request enters [`Stage::ErrorBoundary`],
//! then [`Stage::Authentication`], then [`Stage::Logging`], then the router; the
//! response travels back through the same stages in reverse. Any stage may
//! answer on its own without calling the stages inside it.

use axum::{Router, middleware};

use crate::api::middleware::{auth, error_boundary, logging};

/// A single pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ErrorBoundary,
    Authentication,
    Logging,
}

/// Pipeline order, outermost first.
pub const STAGES: [Stage; 3] = [Stage::ErrorBoundary, Stage::Authentication, Stage::Logging];

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::ErrorBoundary => "error_boundary",
            Stage::Authentication => "authentication",
            Stage::Logging => "logging",
        }
    }

    /// Wraps `router` so this stage runs before it.
    fn wrap(self, router: Router) -> Router {
        match self {
            Stage::ErrorBoundary => router.layer(middleware::from_fn(error_boundary::layer)),
            Stage::Authentication => router.layer(middleware::from_fn(auth::layer)),
            Stage::Logging => router.layer(middleware::from_fn(logging::layer)),
        }
    }
}

/// Wraps `router` in every stage of [`STAGES`].
///
/// The last layer added is the outermost, so stages are applied innermost first.
pub fn apply(router: Router) -> Router {
    STAGES
        .iter()
        .rev()
        .fold(router, |router, stage| stage.wrap(router))
}
