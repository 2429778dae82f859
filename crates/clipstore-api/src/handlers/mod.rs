//! Request handlers for the presigned-access broker.

pub mod presign_download;
pub mod presign_upload;
pub mod videos;

use crate::error::HttpAppError;
use clipstore_core::AppError;
use std::future::Future;
use std::time::Duration;

/// Bound a call to an external collaborator.
///
/// The metadata store and object storage are the only suspension points; each
/// call gets the configured timeout and an elapsed timer surfaces as a
/// retryable `Unavailable` instead of being retried here.
pub(crate) async fn with_dependency_timeout<T, E, F>(
    dependency: &str,
    limit: Duration,
    fut: F,
) -> Result<T, HttpAppError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<HttpAppError>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(HttpAppError(AppError::Unavailable(format!(
            "{} call timed out after {:?}",
            dependency, limit
        )))),
    }
}
