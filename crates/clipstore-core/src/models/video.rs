//! Video metadata records.
//!
//! The metadata store owns these rows; the broker reads them for ownership
//! checks and listing, and inserts one only on behalf of the caller after a
//! completed direct upload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle status of a video record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    /// Raw bytes are in object storage and the record has been registered.
    Uploaded,
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoStatus::Uploaded => write!(f, "uploaded"),
        }
    }
}

impl FromStr for VideoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uploaded" => Ok(VideoStatus::Uploaded),
            other => Err(format!("unknown video status: {}", other)),
        }
    }
}

/// One video's metadata, keyed by its storage key.
#[derive(Debug, Clone)]
pub struct VideoRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub storage_key: String,
    pub filename: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub status: VideoStatus,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a new record; id and created_at are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewVideoRecord {
    pub owner_id: Uuid,
    pub storage_key: String,
    pub filename: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub status: VideoStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(VideoStatus::Uploaded.to_string(), "uploaded");
        assert_eq!("uploaded".parse::<VideoStatus>(), Ok(VideoStatus::Uploaded));
        assert!("transcoding".parse::<VideoStatus>().is_err());
    }
}
