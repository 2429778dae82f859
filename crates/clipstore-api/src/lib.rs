//! Clipstore API Library
//!
//! HTTP surface of the presigned-access broker: the upload- and
//! download-credential issuers, record registration/listing, auth middleware,
//! and application setup.

// Module declarations
mod api_doc;
pub mod constants;
mod handlers;
pub mod telemetry;

// Public modules (integration tests build the router through these)
pub mod auth;
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
