use crate::error::ErrorResponse;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a session token (HS256).
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id
    pub sub: Uuid,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
}

/// Resolved, non-anonymous caller identity, stored in request extensions by
/// the auth middleware.
#[derive(Debug, Clone, Copy)]
pub struct Caller {
    pub id: Uuid,
}

// Extract directly from request parts so handlers can take Caller as an argument.
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Caller>().copied().ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Missing caller identity".to_string(),
                    details: None,
                    code: "UNAUTHENTICATED".to_string(),
                    recoverable: false,
                    suggested_action: Some("Sign in and retry with a valid session".to_string()),
                }),
            )
        })
    }
}
