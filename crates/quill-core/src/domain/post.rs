use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Prefix that namespaces post records inside the shared table.
pub const POST_KEY_PREFIX: &str = "POST#";

/// Post entity - the only record kind the service stores.
///
/// Field values are opaque and returned exactly as they were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub publication_date: String,
}

impl Post {
    /// Create a post from caller-supplied fields with a freshly generated id.
    pub fn new(fields: NewPost) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            description: fields.description,
            author: fields.author,
            publication_date: fields.publication_date,
        }
    }

    /// Partition key this post is stored under.
    pub fn key(&self) -> PostKey {
        PostKey::for_id(&self.id)
    }
}

/// The mutable fields of a post, as supplied by a create request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub author: String,
    pub publication_date: String,
}

impl NewPost {
    /// Parse a raw request body.
    ///
    /// An absent or empty body is "Missing body"; anything that is not a JSON
    /// object carrying the four string fields is "Invalid body".
    pub fn from_body(body: Option<&[u8]>) -> Result<Self, DomainError> {
        let body = match body {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return Err(DomainError::Validation("Missing body".to_string())),
        };

        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "Rejected create body");
            DomainError::Validation("Invalid body".to_string())
        })
    }
}

/// Namespaced partition key: `POST#<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostKey(String);

impl PostKey {
    pub fn for_id(id: &str) -> Self {
        Self(format!("{POST_KEY_PREFIX}{id}"))
    }

    /// Parse a stored key, returning `None` for other record kinds.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.strip_prefix(POST_KEY_PREFIX) {
            Some(id) if !id.is_empty() => Some(Self(raw.to_string())),
            _ => None,
        }
    }

    pub fn id(&self) -> &str {
        &self.0[POST_KEY_PREFIX.len()..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
