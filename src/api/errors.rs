//! # API Errors
//!
//! The three client-visible failures, each with a fixed message. Every
//! error response carries the same envelope; diagnostic detail goes to the
//! structured log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Client-visible request failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request body could not be read against the documented schema
    #[error("bad request")]
    BadRequest,

    /// The requested category, question, or page does not exist
    #[error("resource not found")]
    NotFound,

    /// The request could not be carried out due to a data, lookup, or
    /// runtime failure
    #[error("unprocessable")]
    Unprocessable,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl From<ApiError> for ErrorBody {
    fn from(err: ApiError) -> Self {
        Self {
            success: false,
            error: err.status_code().as_u16(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::from(self));
        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // The log line is the only operator-visible detail; the client
        // gets the fixed message.
        Logger::error("STORE_OPERATION_FAILED", &[("error", &err.to_string())]);
        ApiError::Unprocessable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Unprocessable.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ApiError::BadRequest.to_string(), "bad request");
        assert_eq!(ApiError::NotFound.to_string(), "resource not found");
        assert_eq!(ApiError::Unprocessable.to_string(), "unprocessable");
    }

    #[test]
    fn test_envelope_shape() {
        let body = ErrorBody::from(ApiError::NotFound);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 404);
        assert_eq!(json["message"], "resource not found");
    }

    #[test]
    fn test_store_failure_collapses_to_unprocessable() {
        let err = ApiError::from(StoreError::Backend("connection refused".to_string()));
        assert_eq!(err, ApiError::Unprocessable);
    }
}
