//! Board and theme persistence over a [`KeyValueStore`], including the
//! startup reconciliation that decides between persisted data and the
//! default seed.
//!
//! Read problems are never surfaced to the caller: a missing, corrupt, or
//! empty blob falls back to the seed, which is eagerly written back so
//! subsequent loads are stable. Write failures are reported to the caller
//! and logged; the in-memory state stays authoritative for the session.

use flowboard_core::{FlowboardError, FlowboardResult};
use flowboard_domain::BoardState;

use crate::traits::KeyValueStore;

/// Storage key for the JSON-serialized board state.
pub const COLUMNS_KEY: &str = "kanban-columns";
/// Storage key for the theme flag, `"dark"` or `"light"`.
pub const THEME_KEY: &str = "kanban-theme";

/// How the session's initial board state was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Persisted data was missing, corrupt, or empty; the default seed
    /// was used and written back.
    Seeded,
    /// Persisted data had at least one non-empty column and was trusted
    /// verbatim.
    Persisted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// `"dark"` selects the dark theme; anything else, including absence,
    /// falls back to light.
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

pub struct BoardRepository<S> {
    store: S,
}

impl<S: KeyValueStore> BoardRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted board, reconciling with the default seed. Runs
    /// once per session at initialization.
    pub async fn load_board(&self) -> (BoardState, LoadSource) {
        let raw = match self.store.get(COLUMNS_KEY).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("board storage unreadable, using defaults: {e}");
                return (self.seed_and_write_back().await, LoadSource::Seeded);
            }
        };

        let Some(raw) = raw else {
            tracing::debug!("no persisted board found, seeding defaults");
            return (self.seed_and_write_back().await, LoadSource::Seeded);
        };

        match serde_json::from_str::<BoardState>(&raw) {
            Ok(state) if state.has_any_tasks() => (state, LoadSource::Persisted),
            Ok(_) => {
                tracing::debug!("persisted board holds no tasks, seeding defaults");
                (self.seed_and_write_back().await, LoadSource::Seeded)
            }
            Err(e) => {
                tracing::warn!("persisted board is corrupt, using defaults: {e}");
                (self.seed_and_write_back().await, LoadSource::Seeded)
            }
        }
    }

    async fn seed_and_write_back(&self) -> BoardState {
        let seed = BoardState::seed();
        // Best effort: with no writable storage the session simply runs
        // in memory only.
        if let Err(e) = self.save_board(&seed).await {
            tracing::error!("failed to write default seed: {e}");
        }
        seed
    }

    /// Serialize the full board state and overwrite the stored blob.
    pub async fn save_board(&self, state: &BoardState) -> FlowboardResult<()> {
        let json = serde_json::to_string(state)
            .map_err(|e| FlowboardError::Serialization(e.to_string()))?;
        self.store.set(COLUMNS_KEY, &json).await
    }

    pub async fn load_theme(&self) -> Theme {
        match self.store.get(THEME_KEY).await {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                tracing::warn!("theme storage unreadable, using light theme: {e}");
                Theme::default()
            }
        }
    }

    pub async fn save_theme(&self, theme: Theme) -> FlowboardResult<()> {
        self.store.set(THEME_KEY, theme.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::traits::MockKeyValueStore;
    use flowboard_domain::{ColumnId, Task, TaskInput};

    fn task(title: &str, column_id: ColumnId) -> Task {
        Task::create(
            &TaskInput {
                title: title.to_string(),
                ..Default::default()
            },
            column_id,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_blob_seeds_and_writes_back() {
        let repo = BoardRepository::new(MemoryStore::new());

        let (state, source) = repo.load_board().await;
        assert_eq!(source, LoadSource::Seeded);
        assert_eq!(state, BoardState::seed());

        // The seed was eagerly persisted, so the next load parses it.
        let raw = repo.store().get(COLUMNS_KEY).await.unwrap().unwrap();
        let stored: BoardState = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, BoardState::seed());
    }

    #[tokio::test]
    async fn test_corrupt_blob_seeds() {
        let store = MemoryStore::with_entries([(
            COLUMNS_KEY.to_string(),
            "{not valid json".to_string(),
        )]);
        let repo = BoardRepository::new(store);

        let (state, source) = repo.load_board().await;
        assert_eq!(source, LoadSource::Seeded);
        assert_eq!(state, BoardState::seed());
    }

    #[tokio::test]
    async fn test_wrong_shape_blob_seeds() {
        let store = MemoryStore::with_entries([(
            COLUMNS_KEY.to_string(),
            r#"{"todo": "not a column"}"#.to_string(),
        )]);
        let repo = BoardRepository::new(store);

        let (_, source) = repo.load_board().await;
        assert_eq!(source, LoadSource::Seeded);
    }

    #[tokio::test]
    async fn test_empty_columns_seed() {
        let empty = serde_json::to_string(&BoardState::seed()).unwrap();
        let store = MemoryStore::with_entries([(COLUMNS_KEY.to_string(), empty)]);
        let repo = BoardRepository::new(store);

        let (_, source) = repo.load_board().await;
        assert_eq!(source, LoadSource::Seeded);
    }

    #[tokio::test]
    async fn test_non_empty_board_is_trusted_verbatim() {
        let saved = BoardState::seed()
            .with_task_added(task("Write tests", ColumnId::Todo))
            .with_task_added(task("Ship release", ColumnId::Done));

        let repo = BoardRepository::new(MemoryStore::new());
        repo.save_board(&saved).await.unwrap();

        let (loaded, source) = repo.load_board().await;
        assert_eq!(source, LoadSource::Persisted);
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_unreadable_storage_degrades_to_seed() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|_| Err(FlowboardError::StorageRead("storage disabled".to_string())));
        store
            .expect_set()
            .returning(|_, _| Err(FlowboardError::StorageWrite("storage disabled".to_string())));

        let repo = BoardRepository::new(store);
        let (state, source) = repo.load_board().await;

        assert_eq!(source, LoadSource::Seeded);
        assert_eq!(state, BoardState::seed());
    }

    #[tokio::test]
    async fn test_save_failure_is_reported() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set()
            .returning(|_, _| Err(FlowboardError::StorageWrite("quota exceeded".to_string())));

        let repo = BoardRepository::new(store);
        let result = repo.save_board(&BoardState::seed()).await;
        assert!(matches!(result, Err(FlowboardError::StorageWrite(_))));
    }

    #[tokio::test]
    async fn test_theme_defaults_to_light() {
        let repo = BoardRepository::new(MemoryStore::new());
        assert_eq!(repo.load_theme().await, Theme::Light);
    }

    #[tokio::test]
    async fn test_theme_roundtrip() {
        let repo = BoardRepository::new(MemoryStore::new());
        repo.save_theme(Theme::Dark).await.unwrap();

        assert_eq!(repo.load_theme().await, Theme::Dark);
        assert_eq!(
            repo.store().get(THEME_KEY).await.unwrap().as_deref(),
            Some("dark")
        );
    }

    #[tokio::test]
    async fn test_unknown_theme_value_falls_back_to_light() {
        let store =
            MemoryStore::with_entries([(THEME_KEY.to_string(), "solarized".to_string())]);
        let repo = BoardRepository::new(store);
        assert_eq!(repo.load_theme().await, Theme::Light);
    }
}
