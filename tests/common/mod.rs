#![allow(dead_code)]

use axum::{ServiceExt, extract::Request};
use axum_test::TestServer;
use std::sync::Arc;
use user_management_api::domain::entities::User;
use user_management_api::domain::repositories::UserRepository;
use user_management_api::infrastructure::persistence::InMemoryUserRepository;
use user_management_api::routes::app_router;
use user_management_api::state::AppState;

pub const TOKEN: &str = "test-token";

pub fn create_test_state() -> (AppState, Arc<InMemoryUserRepository>) {
    let repository = Arc::new(InMemoryUserRepository::seeded());
    let state = AppState::new(repository.clone());

    (state, repository)
}

pub fn make_server() -> (TestServer, Arc<InMemoryUserRepository>) {
    let (state, repository) = create_test_state();
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    let server = TestServer::new(app).unwrap();

    (server, repository)
}

pub async fn snapshot(repository: &InMemoryUserRepository) -> Vec<User> {
    repository.list().await.unwrap()
}
