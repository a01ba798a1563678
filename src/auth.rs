//! Tenant identity extraction.
//!
//! Token issuance lives with the external identity provider; this module only
//! decodes the bearer token's claims and turns the `sub` claim into the
//! caller's [`TenantId`]. A development bypass accepts an `X-User-Id` header
//! instead, so the service can run locally without the provider.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::domain::TenantId;
use crate::error::Error;

/// Header consulted when the dev bypass is enabled.
const DEV_USER_HEADER: &str = "x-user-id";
const DEFAULT_DEV_USER: &str = "user_demo";

#[derive(Clone)]
pub struct AuthConfig {
    /// Shared secret used to verify bearer tokens (HS256).
    pub jwt_secret: Option<String>,
    /// When set, skip token verification and trust the `X-User-Id` header.
    pub dev_bypass: bool,
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

/// The authenticated tenant for the current request.
pub struct CurrentTenant(pub TenantId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentTenant
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        if config.dev_bypass {
            let user = parts
                .headers
                .get(DEV_USER_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_DEV_USER);
            let tenant = TenantId::new(user)
                .map_err(|_| Error::Unauthorized("must be authenticated".to_string()))?;
            return Ok(Self(tenant));
        }

        let token = extract_bearer(&parts.headers)?;
        let secret = config
            .jwt_secret
            .as_deref()
            .ok_or_else(|| Error::Unauthorized("authentication is not configured".to_string()))?;

        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "bearer token rejected");
            Error::Unauthorized("invalid bearer token".to_string())
        })?;

        let tenant = TenantId::new(data.claims.sub)
            .map_err(|_| Error::Unauthorized("token has no subject".to_string()))?;
        Ok(Self(tenant))
    }
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, Error> {
    let unauthorized = || Error::Unauthorized("must be authenticated".to_string());
    let header = headers.get(AUTHORIZATION).ok_or_else(unauthorized)?;
    let header = header.to_str().map_err(|_| unauthorized())?;
    let token = header.strip_prefix("Bearer ").ok_or_else(unauthorized)?.trim();
    if token.is_empty() {
        return Err(unauthorized());
    }
    Ok(token)
}
