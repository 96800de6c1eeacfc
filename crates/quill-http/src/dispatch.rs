//! Method switch for the two resources.
//!
//! `/posts` and `/posts/{id}` are separate entry points, mirroring the two
//! functions deployed behind the gateway.

use quill_core::PostService;
use quill_shared::response::MISSING_ID;

use crate::error::ApiError;
use crate::handlers;
use crate::reply::Reply;

pub const COLLECTION_ALLOW: &str = "GET, POST";
pub const ITEM_ALLOW: &str = "GET, DELETE";

/// Entry point for `/posts`.
pub async fn collection(posts: &PostService, method: &str, body: Option<&[u8]>) -> Reply {
    let result = match method {
        "GET" => handlers::get_all(posts).await,
        "POST" => handlers::create(posts, body).await,
        other => Err(ApiError::MethodNotAllowed {
            method: other.to_string(),
            allow: COLLECTION_ALLOW,
        }),
    };
    result.unwrap_or_else(ApiError::into_reply)
}

/// Entry point for `/posts/{id}`.
pub async fn item(posts: &PostService, method: &str, id: Option<&str>) -> Reply {
    let id = match id {
        Some(id) if !id.is_empty() => id,
        _ => return ApiError::BadRequest(MISSING_ID.to_string()).into_reply(),
    };

    let result = match method {
        "GET" => handlers::get_one(posts, id).await,
        "DELETE" => handlers::delete(posts, id).await,
        other => Err(ApiError::MethodNotAllowed {
            method: other.to_string(),
            allow: ITEM_ALLOW,
        }),
    };
    result.unwrap_or_else(ApiError::into_reply)
}
