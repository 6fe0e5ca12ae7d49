use crate::error::FlowboardError;

pub type FlowboardResult<T> = Result<T, FlowboardError>;
