//! Repository trait for user records.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the user collection.
///
/// The repository owns identity assignment: a created user receives
/// `max(existing ids) + 1`, or `1` when the collection is empty.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - process-lifetime storage
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns all users in insertion order.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Finds a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Stores a new user and returns it with its assigned id.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Replaces name, email and role of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, AppError>;

    /// Removes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
