use async_trait::async_trait;
use flowboard_core::FlowboardResult;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::traits::KeyValueStore;

/// In-memory key-value store.
///
/// Backs the board when no durable storage is available; the session then
/// simply loses its data at shutdown instead of failing. Also serves as
/// the test double for the repository and session suites.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, for seeding test fixtures.
    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: RwLock::new(entries.into_iter().collect()),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> FlowboardResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> FlowboardResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("kanban-theme").await.unwrap().is_none());

        store.set("kanban-theme", "dark").await.unwrap();
        assert_eq!(
            store.get("kanban-theme").await.unwrap().as_deref(),
            Some("dark")
        );
    }

    #[tokio::test]
    async fn test_with_entries() {
        let store =
            MemoryStore::with_entries([("kanban-theme".to_string(), "dark".to_string())]);
        assert_eq!(
            store.get("kanban-theme").await.unwrap().as_deref(),
            Some("dark")
        );
    }
}
