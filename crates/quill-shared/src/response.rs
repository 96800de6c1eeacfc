//! The `{"message": ...}` body used for confirmations and errors alike.

use serde::{Deserialize, Serialize};

pub const POST_CREATED: &str = "Post created";
pub const POST_DELETED: &str = "Post deleted";
pub const POST_NOT_FOUND: &str = "Post not found";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const MISSING_ID: &str = "Missing id";
pub const INVALID_BODY: &str = "Invalid body";
pub const NOT_FOUND: &str = "Not found";
pub const PAYLOAD_TOO_LARGE: &str = "Payload too large";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Plain message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn post_created() -> Self {
        Self::new(POST_CREATED)
    }

    pub fn post_deleted() -> Self {
        Self::new(POST_DELETED)
    }

    pub fn not_found() -> Self {
        Self::new(POST_NOT_FOUND)
    }

    pub fn internal_error() -> Self {
        Self::new(INTERNAL_ERROR)
    }
}
