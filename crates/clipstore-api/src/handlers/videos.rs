use crate::auth::Caller;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::handlers::with_dependency_timeout;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use clipstore_core::keys::{is_video_content_type, key_in_owner_namespace, within_size_limit};
use clipstore_core::models::{NewVideoRecord, RegisterVideoRequest, VideoResponse, VideoStatus};
use clipstore_core::AppError;
use std::sync::Arc;
use validator::Validate;

/// Register a metadata record after a completed direct upload.
///
/// The caller may only register keys inside its own namespace, and the object
/// must already exist in storage. A crash between the raw upload and this
/// call leaves an orphaned object; that gap is accepted (no reconciliation).
#[utoipa::path(
    post,
    path = "/api/v0/videos",
    tag = "videos",
    request_body = RegisterVideoRequest,
    responses(
        (status = 200, description = "Record registered", body = VideoResponse),
        (status = 400, description = "Invalid record or key already registered", body = ErrorResponse),
        (status = 401, description = "No resolved caller identity", body = ErrorResponse),
        (status = 403, description = "Key is outside the caller's namespace", body = ErrorResponse),
        (status = 404, description = "No object in storage under this key", body = ErrorResponse),
        (status = 503, description = "Metadata store or object storage unavailable", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(caller_id = %caller.id, operation = "register_video")
)]
pub async fn register_video(
    caller: Caller,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<RegisterVideoRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    if !is_video_content_type(&request.content_type) {
        return Err(AppError::InvalidArgument(format!(
            "unsupported content type: {}",
            request.content_type
        ))
        .into());
    }

    if !within_size_limit(request.size_bytes, state.config.max_video_size_bytes) {
        return Err(AppError::InvalidArgument(format!(
            "size exceeds limit: {} bytes",
            request.size_bytes
        ))
        .into());
    }

    if !key_in_owner_namespace(&request.storage_key, caller.id) {
        return Err(
            AppError::Forbidden("storage key is outside the caller's namespace".to_string()).into(),
        );
    }

    let exists = with_dependency_timeout(
        "object storage",
        state.config.dependency_timeout(),
        state.storage.exists(&request.storage_key),
    )
    .await?;
    if !exists {
        return Err(AppError::NotFound(format!(
            "no object in storage under key {}",
            request.storage_key
        ))
        .into());
    }

    let record = with_dependency_timeout(
        "metadata store",
        state.config.dependency_timeout(),
        state.videos.insert(NewVideoRecord {
            owner_id: caller.id,
            storage_key: request.storage_key.clone(),
            filename: request.filename.clone(),
            content_type: request.content_type.clone(),
            size_bytes: request.size_bytes as i64,
            status: VideoStatus::Uploaded,
        }),
    )
    .await
    .map_err(|err| match err.0 {
        // The key is unique across all owners; a second registration is a caller error.
        AppError::Database(sqlx::Error::Database(ref db)) if db.is_unique_violation() => {
            HttpAppError(AppError::InvalidArgument(format!(
                "a record already exists for key {}",
                request.storage_key
            )))
        }
        other => HttpAppError(other),
    })?;

    tracing::info!(
        video_id = %record.id,
        storage_key = %record.storage_key,
        "Registered video record"
    );

    Ok(Json(VideoResponse::from(record)))
}

/// List the caller's video records, newest first.
#[utoipa::path(
    get,
    path = "/api/v0/videos",
    tag = "videos",
    responses(
        (status = 200, description = "Caller's records, created_at descending", body = [VideoResponse]),
        (status = 401, description = "No resolved caller identity", body = ErrorResponse),
        (status = 503, description = "Metadata store unavailable", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(caller_id = %caller.id, operation = "list_videos"))]
pub async fn list_videos(
    caller: Caller,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = with_dependency_timeout(
        "metadata store",
        state.config.dependency_timeout(),
        state.videos.list_by_owner(caller.id),
    )
    .await?;

    let response: Vec<VideoResponse> = records.into_iter().map(VideoResponse::from).collect();
    Ok(Json(response))
}
