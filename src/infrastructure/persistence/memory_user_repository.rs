//! In-memory implementation of [`UserRepository`].

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;

/// User store backed by a vector guarded by an async read-write lock.
///
/// Id assignment and insertion happen under the same write guard, so
/// concurrent creates never observe the same maximum id.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Creates a store holding the two startup records.
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }
}

/// Records loaded at startup when seeding is enabled.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Ahmed Ali", "ahmed@techhive.com", "Admin"),
        User::new(2, "Sara Smith", "sara@techhive.com", "Developer"),
    ]
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("User not found.", json!({ "id": id }))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        let id = users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
        let user = User::new(id, new_user.name, new_user.email, new_user.role);
        users.push(user.clone());

        tracing::debug!(id, "User stored");
        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| not_found(id))?;
        user.apply(patch);

        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| not_found(id))?;
        users.remove(index);

        Ok(())
    }
}
