//! Domain layer containing business entities and rules.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`validation`] - Field rules applied to user input
//!
//! The domain layer has no dependencies on the HTTP layer; business logic that
//! coordinates validation and storage lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
pub mod validation;
