//! Storage trait: the narrow surface the broker needs from object storage.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to sign URL: {0}")]
    SignFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Time-bounded, single-operation access grants against object storage.
///
/// Implementations issue credentials only; expiry enforcement happens
/// entirely in the downstream storage service.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Presigned PUT URL scoped to exactly one key. The declared content type
    /// is passed through for backends that can bind it into the signature.
    async fn presigned_put_url(
        &self,
        storage_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Presigned GET URL for one existing object.
    async fn presigned_get_url(
        &self,
        storage_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Whether an object exists under the given key.
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;
}
