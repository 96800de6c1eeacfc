//! # Quill Shared
//!
//! Wire types shared by every HTTP surface of the service.

pub mod dto;
pub mod response;

pub use response::MessageResponse;
