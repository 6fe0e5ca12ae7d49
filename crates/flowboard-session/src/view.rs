//! Render-ready projections of session state.
//!
//! A [`BoardView`] is everything the presentation layer needs for one
//! frame: per-column visible tasks and counts in fixed display order, the
//! board-wide summary, the active theme, and the current search term.

use flowboard_domain::{
    board_summary, column_counts, visible_tasks, BoardState, BoardSummary, Column, ColumnCounts,
    ColumnId, Task,
};
use flowboard_persistence::Theme;

#[derive(Debug, Clone)]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    /// Tasks matching the current search term, in display order.
    pub tasks: Vec<Task>,
    pub counts: ColumnCounts,
}

#[derive(Debug, Clone)]
pub struct BoardView {
    /// Columns in fixed display order: to do, in progress, done.
    pub columns: Vec<ColumnView>,
    pub summary: BoardSummary,
    pub theme: Theme,
    pub search_term: String,
}

impl BoardView {
    pub fn compute(state: &BoardState, search_term: &str, theme: Theme) -> BoardView {
        let columns = ColumnId::ALL
            .into_iter()
            .map(|id| {
                // A column missing from a loaded state renders empty.
                let fallback = Column::new(id);
                let column = state.column(id).unwrap_or(&fallback);
                ColumnView {
                    id,
                    title: column.title.clone(),
                    tasks: visible_tasks(column, search_term)
                        .into_iter()
                        .cloned()
                        .collect(),
                    counts: column_counts(column, search_term),
                }
            })
            .collect();

        BoardView {
            columns,
            summary: board_summary(state),
            theme,
            search_term: search_term.to_string(),
        }
    }

    pub fn column(&self, id: ColumnId) -> &ColumnView {
        self.columns
            .iter()
            .find(|column| column.id == id)
            .expect("fixed column set always present in view")
    }
}
