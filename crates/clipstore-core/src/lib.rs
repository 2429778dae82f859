//! Clipstore Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! pure key/validation helpers shared across all clipstore components.

pub mod authz;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use authz::{authorize, AccessDecision};
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
