//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::persistence::InMemoryUserRepository;

/// State shared by all requests.
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
}

impl AppState {
    /// Builds the state around an existing user store.
    pub fn new(repository: Arc<InMemoryUserRepository>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }
}
