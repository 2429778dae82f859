//! Session resolution: middleware verifies the caller's session token and
//! stores a [models::Caller] in request extensions for handlers to extract.

pub mod middleware;
pub mod models;

pub use middleware::{auth_middleware, AuthState};
pub use models::Caller;
