//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Request DTOs are converted into
//! domain inputs, where validation rules live.

pub mod user;
