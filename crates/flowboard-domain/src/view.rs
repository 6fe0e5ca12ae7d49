//! Derived views over the board state: search filtering and counts.
//!
//! Everything here is pure and side-effect-free, safe to recompute on
//! every render.

use serde::Serialize;

use crate::board::BoardState;
use crate::column::{Column, ColumnId};
use crate::task::Task;

/// Per-column counts under the current search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnCounts {
    pub visible: usize,
    pub total: usize,
}

/// Board-wide totals shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub total_tasks: usize,
    pub done_tasks: usize,
}

fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Filter a task list by case-insensitive title substring. An empty or
/// whitespace-only term is the identity filter: the full list in its
/// original order.
pub fn filter_tasks<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    let query = normalize(term);
    if query.is_empty() {
        return tasks.iter().collect();
    }
    tasks
        .iter()
        .filter(|task| task.title.to_lowercase().contains(&query))
        .collect()
}

/// The ordered subset of a column's tasks matching the search term.
pub fn visible_tasks<'a>(column: &'a Column, term: &str) -> Vec<&'a Task> {
    filter_tasks(&column.tasks, term)
}

pub fn column_counts(column: &Column, term: &str) -> ColumnCounts {
    ColumnCounts {
        visible: visible_tasks(column, term).len(),
        total: column.tasks.len(),
    }
}

/// Sum task counts across the fixed column set. Iterates `ColumnId::ALL`
/// rather than the state's own keys so a malformed state missing a column
/// counts it as zero instead of failing.
pub fn board_summary(state: &BoardState) -> BoardSummary {
    let mut total_tasks = 0;
    let mut done_tasks = 0;
    for column_id in ColumnId::ALL {
        let count = state
            .column(column_id)
            .map(|column| column.tasks.len())
            .unwrap_or(0);
        total_tasks += count;
        if column_id == ColumnId::Done {
            done_tasks += count;
        }
    }
    BoardSummary {
        total_tasks,
        done_tasks,
    }
}
