//! Storage abstraction for the presigned-access broker.
//!
//! The broker never moves object bytes itself; the only operations it needs
//! from object storage are presigned-URL issuance (PUT for upload, GET for
//! playback) and an existence check. The [Storage] trait captures exactly
//! that surface; [S3Storage] implements it for any S3-compatible provider.

mod s3;
mod traits;

pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};

use clipstore_core::Config;
use std::sync::Arc;

/// Build the storage backend from configuration.
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage = S3Storage::new(
        config.s3_bucket.clone(),
        config.s3_region.clone(),
        config.s3_endpoint.clone(),
    )
    .await?;
    tracing::info!(
        bucket = %config.s3_bucket,
        region = %config.s3_region,
        endpoint = ?config.s3_endpoint,
        "Object storage initialized"
    );
    Ok(Arc::new(storage))
}
