use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use repo_types::ErrorResponse;
use thiserror::Error;

use crate::features::repositories::repo::StoreError;

/// Client-facing failures. All map to 400 to stay compatible with existing
/// clients, which treat an unknown id the same as a malformed one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid repository ID.")]
    InvalidId,
    #[error("Repo not found.")]
    NotFound,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::NotFound | ApiError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                tracing::warn!(%id, "repository not found");
                ApiError::NotFound
            }
        }
    }
}
