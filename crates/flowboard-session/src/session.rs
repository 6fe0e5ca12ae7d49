//! The board session: an explicit state container with an
//! `init`/`dispose` lifecycle.
//!
//! The session owns the current board snapshot, the search term, the theme
//! flag, the drag gesture, and the task form. The presentation layer is a
//! collaborator: it forwards user intents into the methods here and renders
//! the [`BoardView`] the session hands back.
//!
//! Commit discipline: every mutation computes a new snapshot first, installs
//! it only when it differs from the current one, then writes it through to
//! storage in the same order transitions occur. A failed write is logged
//! and the in-memory state stays authoritative; the user's action still
//! succeeds.

use flowboard_core::{AppConfig, FlowboardResult};
use flowboard_domain::{BoardState, ColumnId, DragSession, Task, TaskId, TaskInput};
use flowboard_persistence::{BoardRepository, FileStore, KeyValueStore, LoadSource, Theme};

use crate::view::BoardView;

/// The task form the presentation layer currently shows, if any.
#[derive(Debug, Clone)]
pub enum TaskForm {
    /// Adding a new task to the given column.
    Create { column_id: ColumnId },
    /// Editing an existing task, captured when the form was opened.
    Edit { task: Task },
}

pub struct BoardSession<S: KeyValueStore> {
    repo: BoardRepository<S>,
    state: BoardState,
    load_source: LoadSource,
    theme: Theme,
    search_term: String,
    drag: DragSession,
    form: Option<TaskForm>,
    saving: bool,
}

impl BoardSession<FileStore> {
    /// Session over the configured data directory.
    pub async fn open_default() -> Self {
        let config = AppConfig::load();
        Self::init(FileStore::from_config(&config)).await
    }
}

impl<S: KeyValueStore> BoardSession<S> {
    /// Load board and theme from the store, reconciling with defaults.
    /// Runs the persistence read exactly once per session.
    pub async fn init(store: S) -> Self {
        let repo = BoardRepository::new(store);
        let (state, load_source) = repo.load_board().await;
        let theme = repo.load_theme().await;
        tracing::debug!(?load_source, "board session initialized");

        Self {
            repo,
            state,
            load_source,
            theme,
            search_term: String::new(),
            drag: DragSession::new(),
            form: None,
            saving: false,
        }
    }

    /// Flush state and theme on shutdown.
    pub async fn dispose(self) {
        if let Err(e) = self.repo.save_board(&self.state).await {
            tracing::error!("failed to flush board on dispose: {e}");
        }
        if let Err(e) = self.repo.save_theme(self.theme).await {
            tracing::error!("failed to flush theme on dispose: {e}");
        }
    }

    async fn commit(&mut self, next: BoardState) {
        if next == self.state {
            return;
        }
        self.state = next;
        if let Err(e) = self.repo.save_board(&self.state).await {
            tracing::error!("failed to persist board, continuing in memory: {e}");
        }
    }

    // Form lifecycle

    pub fn open_create(&mut self, column_id: ColumnId) {
        self.form = Some(TaskForm::Create { column_id });
    }

    pub fn open_edit(&mut self, task: Task) {
        self.form = Some(TaskForm::Edit { task });
    }

    /// Close the form, discarding the in-progress edit. No state mutation,
    /// no persistence write.
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    pub fn form(&self) -> Option<&TaskForm> {
        self.form.as_ref()
    }

    /// Submit the open form. Validation failures are returned to the
    /// caller with the form retained and the board untouched, so the user
    /// can correct their input. Submissions while a save is in flight are
    /// ignored.
    pub async fn save_form(&mut self, input: TaskInput) -> FlowboardResult<()> {
        if self.saving {
            return Ok(());
        }
        let Some(form) = self.form.clone() else {
            return Ok(());
        };

        let next = match &form {
            TaskForm::Create { column_id } => {
                let task = Task::create(&input, *column_id)?;
                self.state.with_task_added(task)
            }
            TaskForm::Edit { task } => {
                let updated = task.updated(&input)?;
                self.state.with_task_updated(updated)
            }
        };

        self.saving = true;
        self.commit(next).await;
        self.saving = false;
        self.form = None;
        Ok(())
    }

    // Board intents

    /// Delete unconditionally; confirming with the user is the
    /// collaborator's responsibility before calling in.
    pub async fn delete_task(&mut self, id: TaskId) {
        let next = self.state.with_task_removed(id);
        self.commit(next).await;
    }

    pub async fn advance_task(&mut self, id: TaskId) {
        let Some(task) = self.state.find_task(id).cloned() else {
            return;
        };
        let next = self.state.with_task_advanced(&task);
        self.commit(next).await;
    }

    // Drag gesture

    pub fn drag_start(&mut self, task: &Task) {
        self.drag.begin(&self.state, task);
    }

    pub fn drag_end(&mut self) {
        self.drag.cancel();
    }

    pub async fn drop_on(&mut self, target: ColumnId) {
        let next = self.drag.drop_on(&self.state, target);
        self.commit(next).await;
    }

    pub fn dragged_task(&self) -> Option<&Task> {
        self.drag.dragged_task()
    }

    // Search and theme

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub async fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.repo.save_theme(self.theme).await {
            tracing::error!("failed to persist theme, continuing in memory: {e}");
        }
    }

    // Outputs

    /// Render-ready projection of the current state, recomputed on every
    /// call.
    pub fn view(&self) -> BoardView {
        BoardView::compute(&self.state, &self.search_term, self.theme)
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn repository(&self) -> &BoardRepository<S> {
        &self.repo
    }
}
