use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowboardError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage read failed: {0}")]
    StorageRead(String),

    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
