//! Users API
//!
//! An in-memory user directory exposed over HTTP:
//! - Field validation for candidate users
//! - Identity assignment and a single-lock in-memory store
//! - JSON CRUD endpoints under `/api/users`

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{InMemoryUserRepository, UserService};

/// Create the application state backed by an empty in-memory store
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(repository));

    AppState::new(user_service)
}
