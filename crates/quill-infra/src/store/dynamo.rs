//! DynamoDB post store.
//!
//! Posts live in a single table keyed by one string partition key, `PK`,
//! holding `POST#<id>`. Other record kinds may share the table; scans only
//! return items carrying the post prefix.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;

use quill_core::StoreError;
use quill_core::domain::{POST_KEY_PREFIX, Post, PostKey};
use quill_core::ports::PostStore;

use crate::config::{ConfigError, non_empty};

/// Name of the table's partition key attribute.
pub const PARTITION_KEY: &str = "PK";

/// DynamoDB rejects partition key values longer than this.
const MAX_PARTITION_KEY_BYTES: usize = 2048;

const ATTR_ID: &str = "id";
const ATTR_TITLE: &str = "title";
const ATTR_DESCRIPTION: &str = "description";
const ATTR_AUTHOR: &str = "author";
const ATTR_PUBLICATION_DATE: &str = "publicationDate";

/// DynamoDB connection configuration.
#[derive(Debug, Clone)]
pub struct DynamoConfig {
    /// Backing table name.
    pub table_name: String,
    /// Endpoint override, e.g. `http://localhost:8000` for DynamoDB Local.
    pub endpoint_url: Option<String>,
}

impl DynamoConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            table_name: non_empty(&lookup, "TABLE_NAME").ok_or(ConfigError::Missing("TABLE_NAME"))?,
            endpoint_url: non_empty(&lookup, "DYNAMODB_ENDPOINT"),
        })
    }
}

/// DynamoDB-backed post store.
///
/// Holds one SDK client for the life of the process; the client is cheap
/// to clone and safe to share across concurrent invocations.
#[derive(Clone)]
pub struct DynamoPostStore {
    client: Client,
    table_name: String,
}

impl DynamoPostStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Build a client from the default AWS credential and region chain.
    pub async fn connect(config: &DynamoConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(url) = &config.endpoint_url {
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;

        tracing::info!(
            table = %config.table_name,
            endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
            "DynamoDB post store configured"
        );

        Self::new(Client::new(&sdk_config), &config.table_name)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl PostStore for DynamoPostStore {
    async fn put(&self, post: &Post) -> Result<(), StoreError> {
        tracing::debug!(post_id = %post.id, "DynamoDB PutItem");
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(post)))
            .send()
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn get(&self, key: &PostKey) -> Result<Option<Post>, StoreError> {
        if !is_storable(key) {
            tracing::debug!(key_len = key.as_str().len(), "Key too long to exist, skipping GetItem");
            return Ok(None);
        }
        tracing::debug!(post_id = %key.id(), "DynamoDB GetItem");
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(store_error)?;

        output.item().map(from_item).transpose()
    }

    async fn scan(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;
        let mut pages = 0usize;

        // Follow LastEvaluatedKey; a single Scan stops at 1 MB.
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression("begins_with(#pk, :prefix)")
                .expression_attribute_names("#pk", PARTITION_KEY)
                .expression_attribute_values(":prefix", AttributeValue::S(POST_KEY_PREFIX.to_string()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(store_error)?;
            pages += 1;

            for item in output.items() {
                match from_item(item) {
                    Ok(post) => posts.push(post),
                    Err(e) => tracing::warn!(error = %e, "Skipping malformed post item"),
                }
            }

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        tracing::debug!(pages, count = posts.len(), "DynamoDB Scan complete");
        Ok(posts)
    }

    async fn delete(&self, key: &PostKey) -> Result<(), StoreError> {
        if !is_storable(key) {
            tracing::debug!(key_len = key.as_str().len(), "Key too long to exist, skipping DeleteItem");
            return Ok(());
        }
        tracing::debug!(post_id = %key.id(), "DynamoDB DeleteItem");
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(store_error)?;
        Ok(())
    }
}

/// Whether DynamoDB could hold an item under `key` at all.
fn is_storable(key: &PostKey) -> bool {
    key.as_str().len() <= MAX_PARTITION_KEY_BYTES
}

fn store_error<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let detail = DisplayErrorContext(&err).to_string();
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => StoreError::Connection(detail),
        _ => StoreError::Query(detail),
    }
}

fn to_item(post: &Post) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (PARTITION_KEY.to_string(), AttributeValue::S(post.key().to_string())),
        (ATTR_ID.to_string(), AttributeValue::S(post.id.clone())),
        (ATTR_TITLE.to_string(), AttributeValue::S(post.title.clone())),
        (ATTR_DESCRIPTION.to_string(), AttributeValue::S(post.description.clone())),
        (ATTR_AUTHOR.to_string(), AttributeValue::S(post.author.clone())),
        (
            ATTR_PUBLICATION_DATE.to_string(),
            AttributeValue::S(post.publication_date.clone()),
        ),
    ])
}

fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Post, StoreError> {
    let raw_key = string_attr(item, PARTITION_KEY)?;
    let key = PostKey::parse(&raw_key)
        .ok_or_else(|| StoreError::Corrupt(format!("{raw_key:?} is not a post key")))?;

    // Items written without an explicit id still carry it in the key.
    let id = match item.get(ATTR_ID) {
        Some(AttributeValue::S(id)) => id.clone(),
        _ => key.id().to_string(),
    };

    Ok(Post {
        id,
        title: string_attr(item, ATTR_TITLE)?,
        description: string_attr(item, ATTR_DESCRIPTION)?,
        author: string_attr(item, ATTR_AUTHOR)?,
        publication_date: string_attr(item, ATTR_PUBLICATION_DATE)?,
    })
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String, StoreError> {
    match item.get(name) {
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(_) => Err(StoreError::Corrupt(format!("attribute {name} is not a string"))),
        None => Err(StoreError::Corrupt(format!("attribute {name} is missing"))),
    }
}
