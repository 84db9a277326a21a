use axum::extract::FromRequestParts;
use http::header;
use http::request::Parts;

use crate::config::APP_CONFIG;
use crate::error::ApiError;
use crate::jwt::{JwtManager, TokenClaims};

/// Extracts and verifies the bearer session token.
///
/// Missing token rejects with 401; a token that fails signature or expiry
/// verification rejects with 403. On success the decoded claims are handed
/// to the handler.
pub struct AuthClaims(pub TokenClaims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::unauthorized("Access Denied: No Token"))?;

        let claims = JwtManager::new(APP_CONFIG.jwt_secret.clone())
            .verify_jwt(token)
            .map_err(|_| ApiError::forbidden("Invalid or Expired Token"))?;

        Ok(AuthClaims(claims))
    }
}
