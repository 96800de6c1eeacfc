//! # Quill HTTP
//!
//! The request-handling layer shared by the Lambda functions and the
//! actix-web server. Nothing here knows which framework delivered the
//! request: callers hand over a method, an optional body or id, and get a
//! [`Reply`] back to translate into their own response type.

pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod reply;

pub use error::{ApiError, ApiResult};
pub use reply::Reply;
