//! The drag gesture as an explicit state machine.
//!
//! A session is either idle or armed with the dragged task and the column
//! it was picked up from. Arming and clearing happen together; a drop only
//! mutates the board while armed. There is no shared mutable cell read
//! across callback boundaries: the presentation layer forwards each gesture
//! event here and receives the resulting board snapshot.

use crate::board::BoardState;
use crate::column::ColumnId;
use crate::task::Task;

#[derive(Debug, Clone)]
struct ArmedDrag {
    task: Task,
    source: ColumnId,
}

#[derive(Debug, Clone, Default)]
pub struct DragSession {
    armed: Option<ArmedDrag>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the session for a drag of `task`. The source column is resolved
    /// by scanning the current state for the task's id, not taken from the
    /// task value itself, which may be stale. Tasks absent from the board
    /// leave the session idle.
    pub fn begin(&mut self, state: &BoardState, task: &Task) {
        self.armed = state.column_of(task.id).map(|source| ArmedDrag {
            task: task.clone(),
            source,
        });
    }

    pub fn is_active(&self) -> bool {
        self.armed.is_some()
    }

    /// The task currently being dragged, for presentation feedback.
    pub fn dragged_task(&self) -> Option<&Task> {
        self.armed.as_ref().map(|armed| &armed.task)
    }

    /// Complete the gesture on `target`, returning the resulting board
    /// state and disarming the session. An idle session returns the state
    /// unchanged. Dropping on the source column is a harmless re-append at
    /// the end of the same list.
    pub fn drop_on(&mut self, state: &BoardState, target: ColumnId) -> BoardState {
        match self.armed.take() {
            Some(armed) => state.with_task_moved(armed.task.id, armed.source, target),
            None => state.clone(),
        }
    }

    /// Abandon the gesture without mutating the board.
    pub fn cancel(&mut self) {
        self.armed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskInput;

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

    #[test]
    fn test_begin_resolves_source_by_membership() {
        let t = task("Dragged", ColumnId::Todo);
        let state = BoardState::seed().with_task_added(t.clone());
        // Move it behind the session's back so the task value goes stale.
        let state = state.with_task_moved(t.id, ColumnId::Todo, ColumnId::InProgress);

        let mut drag = DragSession::new();
        drag.begin(&state, &t);
        assert!(drag.is_active());

        let next = drag.drop_on(&state, ColumnId::Done);
        assert_eq!(next.column_of(t.id), Some(ColumnId::Done));
        assert_eq!(next.total_tasks(), state.total_tasks());
    }

    #[test]
    fn test_begin_with_unknown_task_stays_idle() {
        let state = BoardState::seed();
        let stray = task("Not on the board", ColumnId::Todo);

        let mut drag = DragSession::new();
        drag.begin(&state, &stray);
        assert!(!drag.is_active());

        let next = drag.drop_on(&state, ColumnId::Done);
        assert_eq!(next, state);
    }

    #[test]
    fn test_drop_moves_and_disarms() {
        let t = task("Ship feature", ColumnId::InProgress);
        let state = BoardState::seed().with_task_added(t.clone());

        let mut drag = DragSession::new();
        drag.begin(&state, &t);
        let next = drag.drop_on(&state, ColumnId::Done);

        assert_eq!(next.column_of(t.id), Some(ColumnId::Done));
        assert!(!drag.is_active());

        // A second drop without re-arming does nothing.
        let again = drag.drop_on(&next, ColumnId::Todo);
        assert_eq!(again, next);
    }

    #[test]
    fn test_drop_on_own_column_reappends() {
        let first = task("First", ColumnId::Todo);
        let state = BoardState::seed()
            .with_task_added(first.clone())
            .with_task_added(task("Second", ColumnId::Todo));

        let mut drag = DragSession::new();
        drag.begin(&state, &first);
        let next = drag.drop_on(&state, ColumnId::Todo);

        let todo = next.column(ColumnId::Todo).unwrap();
        assert_eq!(todo.tasks.last().unwrap().id, first.id);
        assert_eq!(next.total_tasks(), 2);
    }

    #[test]
    fn test_cancel_clears_without_mutation() {
        let t = task("Abandoned", ColumnId::Todo);
        let state = BoardState::seed().with_task_added(t.clone());

        let mut drag = DragSession::new();
        drag.begin(&state, &t);
        drag.cancel();

        assert!(!drag.is_active());
        assert!(drag.dragged_task().is_none());
        let next = drag.drop_on(&state, ColumnId::Done);
        assert_eq!(next, state);
    }
}
