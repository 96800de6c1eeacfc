//! HTTP-level errors and their `{message}` responses.

use quill_core::DomainError;
use quill_shared::MessageResponse;
use quill_shared::response::{METHOD_NOT_ALLOWED, NOT_FOUND, PAYLOAD_TOO_LARGE};

use crate::reply::Reply;

/// Application-level error type that converts to a `{message}` reply.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No route for {0}")]
    UnknownRoute(String),

    #[error("Method {method} not allowed")]
    MethodNotAllowed { method: String, allow: &'static str },

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) | ApiError::UnknownRoute(_) => 404,
            ApiError::MethodNotAllowed { .. } => 405,
            ApiError::PayloadTooLarge => 413,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn into_reply(self) -> Reply {
        let status = self.status_code();
        match self {
            ApiError::BadRequest(message) => Reply::message(status, MessageResponse::new(message)),
            ApiError::NotFound(_) => Reply::message(status, MessageResponse::not_found()),
            ApiError::UnknownRoute(path) => {
                tracing::debug!(%path, "No route");
                Reply::message(status, MessageResponse::new(NOT_FOUND))
            }
            ApiError::PayloadTooLarge => Reply::message(status, MessageResponse::new(PAYLOAD_TOO_LARGE)),
            ApiError::MethodNotAllowed { method, allow } => {
                tracing::debug!(%method, "Method not allowed");
                Reply::message(status, MessageResponse::new(METHOD_NOT_ALLOWED)).with_allow(allow)
            }
            ApiError::Internal(detail) => {
                // Details stay in the logs
                tracing::error!("Internal error: {}", detail);
                Reply::message(status, MessageResponse::internal_error())
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::BadRequest(msg),
            DomainError::NotFound { id } => ApiError::NotFound(id),
            DomainError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type ApiResult = Result<Reply, ApiError>;
