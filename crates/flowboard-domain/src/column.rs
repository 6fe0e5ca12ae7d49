use serde::{Deserialize, Serialize};

use crate::task::Task;

/// The closed set of board columns. Columns are never created or removed
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    /// Canonical display order, also used wherever the fixed column set
    /// must be iterated instead of whatever keys a loaded state carries.
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    /// The column a task advances into, or `None` from `Done`.
    pub fn next(self) -> Option<ColumnId> {
        match self {
            ColumnId::Todo => Some(ColumnId::InProgress),
            ColumnId::InProgress => Some(ColumnId::Done),
            ColumnId::Done => None,
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            ColumnId::Todo => "To Do",
            ColumnId::InProgress => "In Progress",
            ColumnId::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.default_title().to_string(),
            tasks: Vec::new(),
        }
    }
}
