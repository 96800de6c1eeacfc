//! In-memory post store - used for local runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::StoreError;
use quill_core::domain::{Post, PostKey};
use quill_core::ports::PostStore;

/// In-memory store using a HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    items: RwLock<HashMap<PostKey, Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn put(&self, post: &Post) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.insert(post.key(), post.clone());
        Ok(())
    }

    async fn get(&self, key: &PostKey) -> Result<Option<Post>, StoreError> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn scan(&self) -> Result<Vec<Post>, StoreError> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn delete(&self, key: &PostKey) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }
}
