//! User infrastructure module
//!
//! This module provides the in-memory user store and the service that
//! validates candidates and mints identities before touching it.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::UserService;
