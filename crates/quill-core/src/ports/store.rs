use async_trait::async_trait;

use crate::domain::{Post, PostKey};
use crate::error::StoreError;

/// Post store - abstraction over key-value backends (DynamoDB, in-memory).
///
/// Every operation is a single call against the backend; implementations
/// do not retry.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Write a post under its namespaced key, replacing any existing item.
    async fn put(&self, post: &Post) -> Result<(), StoreError>;

    /// Fetch the post stored under `key`.
    async fn get(&self, key: &PostKey) -> Result<Option<Post>, StoreError>;

    /// Return every post in the table. Order is unspecified.
    async fn scan(&self) -> Result<Vec<Post>, StoreError>;

    /// Remove the item under `key`. Succeeds whether or not it existed.
    async fn delete(&self, key: &PostKey) -> Result<(), StoreError>;
}
