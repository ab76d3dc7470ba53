//! Error-to-response mapping.
//!
//! One status per [`DomainError`] variant: validation is 400, bad
//! credentials are 401, everything else is an opaque 500. The body is
//! always the `{"error": …}` shape; internal detail goes to the log, not
//! the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domains::DomainError;
use tracing::error;

use crate::dto::ErrorBody;

/// Response-side wrapper for [`DomainError`], so handlers can end with `?`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            DomainError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            DomainError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            DomainError::Internal(detail) => {
                error!(%detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Handler result alias; the error half always renders as JSON.
pub type ApiResult<T> = Result<T, ApiError>;
