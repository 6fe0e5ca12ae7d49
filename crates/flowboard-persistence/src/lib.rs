pub mod repository;
pub mod store;
pub mod traits;

pub use repository::{BoardRepository, LoadSource, Theme, COLUMNS_KEY, THEME_KEY};
pub use store::{FileStore, MemoryStore};
pub use traits::KeyValueStore;
