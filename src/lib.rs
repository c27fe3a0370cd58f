//! # User Management API
//!
//! A small REST service managing an in-memory collection of users, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - User entity, validation rules, repository trait
//! - **Application Layer** ([`application`]) - User service orchestrating validation and storage
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory user store
//! - **API Layer** ([`api`]) - Handlers, DTOs, pipeline stages and routes
//!
//! ## Request Pipeline
//!
//! Every request passes through three stages before reaching a handler:
//!
//! 1. Error boundary - unhandled failures become `500` with a correlation id
//! 2. Authentication - requests without an `Authorization` header get `401`
//! 3. Logging - method, path and status are logged after routing completes
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"   # Optional
//! cargo run
//!
//! curl -H "Authorization: Bearer anything" http://127.0.0.1:3000/users
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UserService;
    pub use crate::domain::entities::{NewUser, User, UserPatch};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUserRepository;
    pub use crate::state::AppState;
}
