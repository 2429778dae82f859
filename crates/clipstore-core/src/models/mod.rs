//! Domain models shared across clipstore components.

pub mod presign;
pub mod video;

pub use presign::{
    PresignDownloadResponse, PresignUploadRequest, PresignUploadResponse, RegisterVideoRequest,
    VideoResponse,
};
pub use video::{NewVideoRecord, VideoRecord, VideoStatus};
