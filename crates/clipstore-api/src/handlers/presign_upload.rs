use crate::auth::Caller;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::handlers::with_dependency_timeout;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::{Duration, Utc};
use clipstore_core::keys::build_storage_key;
use clipstore_core::models::{PresignUploadRequest, PresignUploadResponse};
use clipstore_core::validation::validate_upload_request;
use clipstore_core::AppError;
use std::sync::Arc;
use validator::Validate;

/// Issue a time-limited write credential for a direct upload.
///
/// Validation runs before the storage call, so a rejected request has no side
/// effects. No metadata record is written here: registering the record after
/// the raw upload succeeds is the caller's next step.
#[utoipa::path(
    post,
    path = "/api/v0/videos/uploads/presign",
    tag = "videos",
    request_body = PresignUploadRequest,
    responses(
        (status = 200, description = "Upload credential issued", body = PresignUploadResponse),
        (status = 400, description = "Missing field, non-video content type, or size over limit", body = ErrorResponse),
        (status = 401, description = "No resolved caller identity", body = ErrorResponse),
        (status = 503, description = "Object storage unavailable", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(
        caller_id = %caller.id,
        content_type = %request.content_type,
        size_bytes = request.size_bytes,
        operation = "issue_upload_credential"
    )
)]
pub async fn issue_upload_credential(
    caller: Caller,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<PresignUploadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;
    validate_upload_request(&request, state.config.max_video_size_bytes)?;

    // Owner-namespaced, collision-free by construction.
    let storage_key = build_storage_key(caller.id, &request.filename);

    let expires_in = state.config.upload_url_expiry();
    let expires_at = Utc::now() + Duration::seconds(state.config.upload_url_expiry_secs as i64);

    let upload_url = with_dependency_timeout(
        "object storage",
        state.config.dependency_timeout(),
        state
            .storage
            .presigned_put_url(&storage_key, &request.content_type, expires_in),
    )
    .await?;

    // The credential itself is never logged.
    tracing::info!(
        storage_key = %storage_key,
        expires_at = %expires_at,
        "Issued upload credential"
    );

    Ok(Json(PresignUploadResponse {
        upload_url,
        storage_key,
        expires_at,
    }))
}
