//! User management service.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::domain::validation::{field_errors, has_blank_field, validate_create, validate_update};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing user records.
///
/// Validation and not-found conditions are returned as [`AppError`] outcomes;
/// nothing here is treated as a fault.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("User with ID {id} not found."), json!({ "id": id }))
        })
    }

    /// Validates and stores a new user.
    ///
    /// # Validation
    ///
    /// - `name` must not be blank
    /// - `email` must not be blank and must contain `@`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails; the store is not touched.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        if let Err(errors) = validate_create(&new_user) {
            let message = if has_blank_field(&errors) {
                "Name and Email are required."
            } else {
                "Invalid email format."
            };
            return Err(AppError::bad_request(message, field_errors(&errors)));
        }

        let user = self.repository.create(new_user).await?;
        tracing::info!(id = user.id, "User created");

        Ok(user)
    }

    /// Replaces name, email and role of an existing user.
    ///
    /// Existence is checked before validation, so an invalid patch for a
    /// missing user reports not-found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Validation`] if `name` or `email` is blank.
    pub async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("User not found.", json!({ "id": id })));
        }

        validate_update(&patch)
            .map_err(|errors| AppError::bad_request("Invalid update data.", field_errors(&errors)))?;

        let user = self.repository.update(id, patch).await?;
        tracing::info!(id, "User updated");

        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(id, "User deleted");

        Ok(())
    }
}
