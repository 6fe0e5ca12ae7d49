pub mod logging;
pub mod session;
pub mod view;

pub use session::{BoardSession, TaskForm};
pub use view::{BoardView, ColumnView};
