//! Request extraction.
//!
//! Thin wrappers over axum's extractors so every rejection, body or query,
//! renders as the API's `{"error": …}` shape with a 400 status instead of
//! axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use domains::DomainError;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor with API-shaped rejections.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(ApiError(DomainError::Validation(rejection.body_text()))),
        }
    }
}

/// Query string extractor with API-shaped rejections.
pub struct AppQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(AppQuery(value)),
            Err(rejection) => Err(ApiError(DomainError::Validation(rejection.body_text()))),
        }
    }
}
