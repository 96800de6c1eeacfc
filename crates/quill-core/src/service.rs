//! Post service - the four operations behind the HTTP surface.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostKey};
use crate::error::DomainError;
use crate::ports::PostStore;

/// Stateless facade over a [`PostStore`].
///
/// Cloning is cheap; the store handle is shared.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Store a new post under a generated id and return it.
    pub async fn create(&self, fields: NewPost) -> Result<Post, DomainError> {
        let post = Post::new(fields);
        self.store.put(&post).await?;
        tracing::info!(post_id = %post.id, "Post created");
        Ok(post)
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.store.scan().await?;
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    pub async fn find(&self, id: &str) -> Result<Post, DomainError> {
        self.store
            .get(&PostKey::for_id(id))
            .await?
            .ok_or_else(|| DomainError::NotFound { id: id.to_string() })
    }

    /// Delete without checking existence first; deleting twice is fine.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.store.delete(&PostKey::for_id(id)).await?;
        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }
}
