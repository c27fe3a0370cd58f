//! Storage implementations of the repository traits.
//!
//! The user collection is process-lifetime state: nothing survives a restart.

pub mod memory_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
