use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use service::errors::ServiceError;

/// Errors a `/people` handler can surface to the caller. Each variant maps
/// to the exact status and plain-text body of the public contract.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing {0} parameter")]
    MissingParameter(&'static str),
    #[error("error - person exists")]
    PersonExists,
    #[error("{0} not found")]
    NotFound(String),
    #[error("Sorry, only GET/DELETE/PATCH/POST methods are supported.")]
    MethodNotSupported,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::PersonExists => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotSupported => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::AlreadyExists(_) => ApiError::PersonExists,
            ServiceError::NotFound(name) => ApiError::NotFound(name),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.to_string();
        warn!(status = %status, reason = %body, "request rejected");
        (status, body).into_response()
    }
}
