//! Crate-wide error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing input. Recoverable by the caller fixing the request.
    #[error("{0}")]
    Validation(String),

    /// A referenced entity does not resolve within the caller's tenant.
    #[error("{0}")]
    NotFound(String),

    /// The operation requires an authenticated tenant and none is present.
    #[error("{0}")]
    Unauthorized(String),

    /// Persistence failures propagate unchanged; the HTTP boundary maps them.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match &self {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Error::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            Error::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        };
        if let Error::Database(e) = &self {
            tracing::error!(error = %e, "request failed on a database error");
        }
        let body = axum::Json(json!({
            "error": code,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
