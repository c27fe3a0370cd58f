//! Application layer services implementing business logic.
//!
//! Services consume repository traits, apply validation rules and translate
//! outcomes into [`crate::error::AppError`] variants for the HTTP layer.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD with validation

pub mod services;
