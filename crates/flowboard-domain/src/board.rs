//! The board state store: a normalized mapping of the fixed column set to
//! ordered task lists.
//!
//! Every operation takes the current state by reference and returns a new
//! snapshot, so consumers can detect changes by comparison and earlier
//! snapshots stay valid. Operations are total over well-formed input: an
//! id that exists nowhere yields an unchanged state. The only hard
//! failures in the subsystem are entity validation errors in [`crate::task`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::column::{Column, ColumnId};
use crate::task::{Task, TaskId};

/// Mapping from the three fixed column ids to their task lists. Serializes
/// transparently as a JSON object keyed by column id, matching the
/// persisted `kanban-columns` blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardState {
    pub columns: BTreeMap<ColumnId, Column>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::seed()
    }
}

impl BoardState {
    /// The default seed: all three columns present and empty.
    pub fn seed() -> Self {
        let columns = ColumnId::ALL
            .into_iter()
            .map(|id| (id, Column::new(id)))
            .collect();
        Self { columns }
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(&id)
    }

    /// True when at least one column holds at least one task. Loaded blobs
    /// that fail this check are discarded in favor of the seed.
    pub fn has_any_tasks(&self) -> bool {
        self.columns.values().any(|column| !column.tasks.is_empty())
    }

    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.columns
            .values()
            .flat_map(|column| column.tasks.iter())
            .find(|task| task.id == id)
    }

    /// The column that actually contains the task, found by membership
    /// scan. Callers use this instead of trusting a task value's own
    /// `column_id`, which may be stale.
    pub fn column_of(&self, id: TaskId) -> Option<ColumnId> {
        ColumnId::ALL.into_iter().find(|&column_id| {
            self.columns
                .get(&column_id)
                .is_some_and(|column| column.tasks.iter().any(|task| task.id == id))
        })
    }

    /// Append the task to the column named by its `column_id`. The column
    /// record is created if a loaded state was missing it.
    pub fn with_task_added(&self, task: Task) -> BoardState {
        let mut next = self.clone();
        next.columns
            .entry(task.column_id)
            .or_insert_with(|| Column::new(task.column_id))
            .tasks
            .push(task);
        next
    }

    /// Replace the task with the same id wherever it currently lives,
    /// preserving its position. Column membership never changes here;
    /// moves go through [`BoardState::with_task_moved`].
    pub fn with_task_updated(&self, task: Task) -> BoardState {
        let mut next = self.clone();
        for column in next.columns.values_mut() {
            for slot in column.tasks.iter_mut() {
                if slot.id == task.id {
                    *slot = task.clone();
                }
            }
        }
        next
    }

    /// Remove the task from whichever column contains it. Unknown ids
    /// leave the state unchanged.
    pub fn with_task_removed(&self, id: TaskId) -> BoardState {
        let mut next = self.clone();
        for column in next.columns.values_mut() {
            column.tasks.retain(|task| task.id != id);
        }
        next
    }

    /// Remove the task from the source column and re-append it at the end
    /// of the target with its `column_id` updated. Returns the state
    /// unchanged when either column is missing or the task is not in the
    /// source. Source and target may be the same column; the task then
    /// moves to the end of its own list.
    pub fn with_task_moved(
        &self,
        id: TaskId,
        source: ColumnId,
        target: ColumnId,
    ) -> BoardState {
        if !self.columns.contains_key(&source) || !self.columns.contains_key(&target) {
            return self.clone();
        }
        let in_source = self
            .columns
            .get(&source)
            .is_some_and(|column| column.tasks.iter().any(|task| task.id == id));
        if !in_source {
            return self.clone();
        }

        let mut next = self.clone();
        let mut moved = None;
        if let Some(column) = next.columns.get_mut(&source) {
            if let Some(index) = column.tasks.iter().position(|task| task.id == id) {
                moved = Some(column.tasks.remove(index));
            }
        }
        if let Some(mut task) = moved {
            task.column_id = target;
            if let Some(column) = next.columns.get_mut(&target) {
                column.tasks.push(task);
            }
        }
        next
    }

    /// One-click advance: todo moves to in-progress, in-progress to done.
    /// Tasks already in done stay put.
    pub fn with_task_advanced(&self, task: &Task) -> BoardState {
        match task.column_id.next() {
            Some(target) => self.with_task_moved(task.id, task.column_id, target),
            None => self.clone(),
        }
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.values().map(|column| column.tasks.len()).sum()
    }
}
