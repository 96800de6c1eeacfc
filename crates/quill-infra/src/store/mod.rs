//! Post store implementations - DynamoDB and in-memory.

mod memory;

#[cfg(feature = "dynamodb")]
mod dynamo;

pub use memory::InMemoryPostStore;

#[cfg(feature = "dynamodb")]
pub use dynamo::{DynamoConfig, DynamoPostStore, PARTITION_KEY};
