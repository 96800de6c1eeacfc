//! # Quill Infrastructure
//!
//! Concrete implementations of the [`PostStore`](quill_core::ports::PostStore) port.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `dynamodb` - DynamoDB store via the AWS SDK

pub mod config;
pub mod store;

pub use config::ConfigError;
pub use store::InMemoryPostStore;

#[cfg(feature = "dynamodb")]
pub use store::{DynamoConfig, DynamoPostStore};
