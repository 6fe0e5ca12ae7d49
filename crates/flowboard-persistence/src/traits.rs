use async_trait::async_trait;
use flowboard_core::FlowboardResult;

/// Abstract string-keyed, string-valued storage, shaped like browser
/// local storage.
///
/// Implementations handle different backends: files on disk for durable
/// sessions, plain memory when no persistent storage is available.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` when absent.
    async fn get(&self, key: &str) -> FlowboardResult<Option<String>>;

    /// Write `value` under `key`, overwriting any prior value.
    async fn set(&self, key: &str, value: &str) -> FlowboardResult<()>;
}
