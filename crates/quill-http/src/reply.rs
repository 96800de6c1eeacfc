//! Framework-neutral HTTP reply.

use serde::Serialize;

use quill_shared::MessageResponse;

use crate::error::ApiError;

/// Status plus JSON body; hosts turn this into their own response type.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: serde_json::Value,
    /// Value for the `Allow` header on 405 replies.
    pub allow: Option<&'static str>,
}

impl Reply {
    /// 200 with `body` serialized as JSON.
    pub fn ok<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(Self {
            status: 200,
            body,
            allow: None,
        })
    }

    pub fn message(status: u16, message: MessageResponse) -> Self {
        Self {
            status,
            // A single string field always serializes
            body: serde_json::to_value(&message).unwrap_or_default(),
            allow: None,
        }
    }

    pub fn with_allow(mut self, allow: &'static str) -> Self {
        self.allow = Some(allow);
        self
    }

    /// Serialized body, ready to be written to the wire.
    pub fn body_string(&self) -> String {
        self.body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_body_matches_wire_type() {
        let message = MessageResponse::post_deleted();
        let reply = Reply::message(200, message.clone());

        let decoded: MessageResponse = serde_json::from_value(reply.body.clone()).unwrap();
        assert_eq!(decoded, message);
        assert_eq!(reply.body_string(), r#"{"message":"Post deleted"}"#);
    }
}
