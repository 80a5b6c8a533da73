//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::error::ValidationError;
use crate::storage::StorageError;

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Stable machine-readable code.
    pub code: String,
}

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No entity with the requested id. Rendered as an empty 404.
    #[error("entity not found")]
    NotFound,

    /// A query parameter could not be decoded.
    #[error("{0}")]
    InvalidQuery(#[from] ValidationError),

    /// The store failed for a reason other than a missing entity.
    #[error("{0}")]
    Storage(StorageError),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::EntityNotFound(_) => Self::NotFound,
            other => Self::Storage(other),
        }
    }
}

impl ApiError {
    /// Status code this error is rendered with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = match &self {
            Self::NotFound => return status.into_response(),
            Self::InvalidQuery(_) => "invalid_query",
            Self::Storage(err) => {
                error!(error = %err, "storage failure");
                "storage_error"
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityId;

    #[test]
    fn not_found_storage_error_maps_to_404() {
        let err: ApiError = StorageError::EntityNotFound(EntityId::from("x")).into();
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn backend_error_maps_to_500() {
        let err: ApiError = StorageError::BackendError("poisoned lock".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_query_maps_to_400() {
        let err: ApiError = ValidationError::InvalidDate {
            value: "x".to_string(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
