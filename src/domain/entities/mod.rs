//! Core domain entities representing the business data model.
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! and mutation:
//! - [`User`] - A stored user record with its assigned id
//! - [`NewUser`] - Input for creating a user (no id yet)
//! - [`UserPatch`] - Replacement values for an existing user's mutable fields

pub mod user;

pub use user::{NewUser, User, UserPatch};
