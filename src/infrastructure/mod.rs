//! Infrastructure layer - store implementations and process plumbing

pub mod logging;
pub mod observability;
pub mod user;
