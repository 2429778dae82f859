//! OpenAPI documentation.

use crate::error;
use crate::handlers;
use clipstore_core::models;
use utoipa::OpenApi;

/// Returns the OpenAPI spec served at /api/openapi.json.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clipstore API",
        version = "0.1.0",
        description = "Presigned-access broker for direct video upload and playback. \
            Clients receive time-limited, key-scoped credentials and exchange bytes \
            directly with object storage; the broker never streams video data. \
            All endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::presign_upload::issue_upload_credential,
        handlers::presign_download::issue_download_credential,
        handlers::videos::register_video,
        handlers::videos::list_videos,
    ),
    components(schemas(
        models::PresignUploadRequest,
        models::PresignUploadResponse,
        models::PresignDownloadResponse,
        models::RegisterVideoRequest,
        models::VideoResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Upload/download credential issuance and video records")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_contains_all_operations() {
        let spec = get_openapi_spec();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.ends_with("/videos/uploads/presign")));
        assert!(paths.iter().any(|p| p.ends_with("/videos/playback")));
        assert!(paths.iter().any(|p| p.ends_with("/videos")));
    }
}
