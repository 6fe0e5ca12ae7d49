pub mod board;
pub mod column;
pub mod drag;
pub mod task;
pub mod view;

pub use board::BoardState;
pub use column::{Column, ColumnId};
pub use drag::DragSession;
pub use task::{Priority, Task, TaskId, TaskInput};
pub use view::{board_summary, column_counts, visible_tasks, BoardSummary, ColumnCounts};
