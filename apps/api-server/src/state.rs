//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::PostService;
use quill_core::ports::PostStore;
use quill_infra::InMemoryPostStore;

#[cfg(feature = "dynamodb")]
use quill_infra::DynamoPostStore;

use crate::config::StoreConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state with the configured store.
    pub async fn new(config: &StoreConfig) -> Self {
        let store: Arc<dyn PostStore> = match config {
            StoreConfig::Memory => {
                tracing::warn!("Using in-memory post store. Data is lost on restart.");
                Arc::new(InMemoryPostStore::new())
            }
            #[cfg(feature = "dynamodb")]
            StoreConfig::Dynamo(dynamo) => Arc::new(DynamoPostStore::connect(dynamo).await),
        };

        tracing::info!("Application state initialized");

        Self::with_store(store)
    }

    pub fn with_store(store: Arc<dyn PostStore>) -> Self {
        Self {
            posts: PostService::new(store),
        }
    }
}
