use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::with_dependency_timeout;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use clipstore_core::models::PresignDownloadResponse;
use clipstore_core::{authorize, AccessDecision, AppError};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackParams {
    /// Storage key of the object to play back
    #[serde(default)]
    pub storage_key: Option<String>,
}

/// Issue a time-limited read credential for one object, after verifying the
/// caller owns the metadata record referencing it.
///
/// Check order: storage key parameter first, then session resolution — a
/// request missing the key is a 400 whether or not it carries a session.
/// 404 (no record) and 403 (record owned by someone else) are deliberately
/// distinct in the API response; the underlying lookup is the same either way.
#[utoipa::path(
    get,
    path = "/api/v0/videos/playback",
    tag = "videos",
    params(PlaybackParams),
    responses(
        (status = 200, description = "Download credential issued", body = PresignDownloadResponse),
        (status = 400, description = "Missing storageKey parameter", body = ErrorResponse),
        (status = 401, description = "No resolved caller identity", body = ErrorResponse),
        (status = 403, description = "Record exists but caller is not the owner", body = ErrorResponse),
        (status = 404, description = "No record for this key", body = ErrorResponse),
        (status = 503, description = "Metadata store or object storage unavailable", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, params, headers),
    fields(operation = "issue_download_credential")
)]
pub async fn issue_download_credential(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlaybackParams>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpAppError> {
    let storage_key = params
        .storage_key
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            AppError::InvalidArgument("missing storageKey query parameter".to_string())
        })?;

    let caller = state.auth.resolve_caller(&headers)?;

    let record = with_dependency_timeout(
        "metadata store",
        state.config.dependency_timeout(),
        state.videos.find_by_storage_key(&storage_key),
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("no video record for key {}", storage_key)))?;

    if authorize(caller.id, &record) == AccessDecision::Deny {
        // Never leak who the actual owner is.
        return Err(AppError::Forbidden("caller does not own this video".to_string()).into());
    }

    let expires_in = state.config.download_url_expiry();
    let expires_at = Utc::now() + Duration::seconds(state.config.download_url_expiry_secs as i64);

    let download_url = with_dependency_timeout(
        "object storage",
        state.config.dependency_timeout(),
        state.storage.presigned_get_url(&storage_key, expires_in),
    )
    .await?;

    tracing::info!(
        storage_key = %storage_key,
        expires_at = %expires_at,
        "Issued download credential"
    );

    Ok(Json(PresignDownloadResponse {
        download_url,
        expires_at,
    }))
}
