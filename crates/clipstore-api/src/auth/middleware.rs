use crate::auth::models::{Caller, SessionClaims};
use crate::constants::SESSION_COOKIE;
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use clipstore_core::AppError;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;

/// Verification state for session tokens.
#[derive(Clone)]
pub struct AuthState {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthState {
    pub fn new(jwt_secret: &str) -> Self {
        AuthState {
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    fn verify(&self, token: &str) -> Result<Caller, AppError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Unauthenticated(format!("invalid session token: {}", e)))?;
        Ok(Caller {
            id: data.claims.sub,
        })
    }

    /// Resolve the caller from request headers. Used by the middleware, and
    /// directly by handlers that run their own checks before session
    /// resolution.
    pub fn resolve_caller(&self, headers: &HeaderMap) -> Result<Caller, AppError> {
        let token = extract_token(headers).ok_or_else(|| {
            AppError::Unauthenticated(
                "missing session (Authorization header or session cookie)".to_string(),
            )
        })?;
        self.verify(&token)
    }
}

/// Token from `Authorization: Bearer ...`, falling back to the session cookie.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(header) = headers.get("Authorization").and_then(|h| h.to_str().ok()) {
        if let Some(token) = header.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    let cookies = headers.get("Cookie").and_then(|h| h.to_str().ok())?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Resolve the caller identity or reject with 401 before any handler runs.
pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let caller = match auth_state.resolve_caller(request.headers()) {
        Ok(caller) => caller,
        Err(err) => return HttpAppError(err).into_response(),
    };

    request.extensions_mut().insert(caller);
    next.run(request).await
}
