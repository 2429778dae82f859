//! Request/response bodies for the two credential issuers.
//!
//! Field names are camelCase on the wire: `{filename, contentType, sizeBytes}`
//! in, `{uploadUrl, storageKey}` / `{downloadUrl}` out. Credentials are
//! transient and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request for a time-limited write credential.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PresignUploadRequest {
    /// Original filename, used (sanitized) as the key suffix
    #[validate(length(
        min = 1,
        max = 255,
        message = "Filename must be between 1 and 255 characters"
    ))]
    pub filename: String,
    /// Declared MIME type; must begin with `video/`
    #[validate(length(
        min = 1,
        max = 255,
        message = "Content type must be between 1 and 255 characters"
    ))]
    pub content_type: String,
    /// Declared size in bytes
    pub size_bytes: u64,
}

/// Write credential plus the key the caller must persist with its metadata.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignUploadResponse {
    /// Presigned PUT URL for direct upload to object storage
    pub upload_url: String,
    /// Storage key the credential is bound to
    pub storage_key: String,
    /// Credential expiry
    pub expires_at: DateTime<Utc>,
}

/// Read credential for one existing object.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignDownloadResponse {
    /// Presigned GET URL for direct playback from object storage
    pub download_url: String,
    /// Credential expiry
    pub expires_at: DateTime<Utc>,
}

/// Registration of a metadata record after a completed direct upload.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterVideoRequest {
    /// Storage key returned by the upload-credential issuer
    #[validate(length(min = 1, max = 1024, message = "Storage key must not be empty"))]
    pub storage_key: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Filename must be between 1 and 255 characters"
    ))]
    pub filename: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Content type must be between 1 and 255 characters"
    ))]
    pub content_type: String,
    pub size_bytes: u64,
}

/// One video record in API responses.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: Uuid,
    pub storage_key: String,
    pub filename: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<crate::models::VideoRecord> for VideoResponse {
    fn from(record: crate::models::VideoRecord) -> Self {
        VideoResponse {
            id: record.id,
            storage_key: record.storage_key,
            filename: record.filename,
            content_type: record.content_type,
            size_bytes: record.size_bytes,
            status: record.status.to_string(),
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_request_uses_camel_case_field_names() {
        let request: PresignUploadRequest = serde_json::from_value(serde_json::json!({
            "filename": "clip.mp4",
            "contentType": "video/mp4",
            "sizeBytes": 1048576
        }))
        .expect("deserialize");
        assert_eq!(request.filename, "clip.mp4");
        assert_eq!(request.content_type, "video/mp4");
        assert_eq!(request.size_bytes, 1_048_576);
    }

    #[test]
    fn test_missing_field_is_a_deserialization_error() {
        let result = serde_json::from_value::<PresignUploadRequest>(serde_json::json!({
            "filename": "clip.mp4",
            "contentType": "video/mp4"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_responses_serialize_camel_case() {
        let response = PresignUploadResponse {
            upload_url: "https://storage.example/put".to_string(),
            storage_key: "users/u1/1-abc-clip.mp4".to_string(),
            expires_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert!(json.get("uploadUrl").is_some());
        assert!(json.get("storageKey").is_some());
        assert!(json.get("expiresAt").is_some());
    }
}
