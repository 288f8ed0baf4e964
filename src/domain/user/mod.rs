//! User domain
//!
//! This module provides the user value, its stored record with identity,
//! field validation, and the repository trait the store is built on.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId, UserRecord};
pub use repository::UserRepository;
pub use validation::{
    validate_new_user, validate_user, UserValidationError, MAX_BIOGRAPHY_LENGTH,
    MAX_NAME_LENGTH, MIN_BIOGRAPHY_LENGTH, MIN_NAME_LENGTH,
};

#[cfg(test)]
pub use repository::MockUserRepository;
