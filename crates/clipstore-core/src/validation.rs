//! Pure validation for upload-credential requests.
//!
//! Every check runs before any external call, in a fixed order, each with a
//! distinct failure: blank fields, non-video content type, oversize
//! declaration. No I/O, so the whole policy is unit-testable.

use crate::error::AppError;
use crate::keys::{is_video_content_type, within_size_limit};
use crate::models::PresignUploadRequest;

/// Validate an upload request against broker policy.
///
/// Field presence is enforced by deserialization; blank strings are treated
/// the same as missing fields.
pub fn validate_upload_request(
    request: &PresignUploadRequest,
    max_size_bytes: u64,
) -> Result<(), AppError> {
    if request.filename.trim().is_empty() || request.content_type.trim().is_empty() {
        return Err(AppError::InvalidArgument(
            "missing field: filename, contentType and sizeBytes are required".to_string(),
        ));
    }

    if !is_video_content_type(&request.content_type) {
        return Err(AppError::InvalidArgument(format!(
            "unsupported content type: {} (must begin with video/)",
            request.content_type
        )));
    }

    if !within_size_limit(request.size_bytes, max_size_bytes) {
        return Err(AppError::InvalidArgument(format!(
            "size exceeds limit: {} bytes declared, maximum is {} bytes",
            request.size_bytes, max_size_bytes
        )));
    }

    Ok(())
}
