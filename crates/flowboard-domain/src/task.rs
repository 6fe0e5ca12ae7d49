use chrono::{DateTime, Utc};
use flowboard_core::{FlowboardError, FlowboardResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::ColumnId;

pub type TaskId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    pub column_id: ColumnId,
    pub created_at: DateTime<Utc>,
}

/// Form values for creating or editing a task.
#[derive(Debug, Clone, Default)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
}

impl TaskInput {
    fn validated_title(&self) -> FlowboardResult<String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FlowboardError::Validation(
                "task title must not be empty".to_string(),
            ));
        }
        Ok(title.to_string())
    }
}

impl Task {
    /// Create a new task in the given column. Rejects blank-after-trim
    /// titles; priority defaults to medium when unset.
    pub fn create(input: &TaskInput, column_id: ColumnId) -> FlowboardResult<Task> {
        let title = input.validated_title()?;
        Ok(Task {
            id: Uuid::new_v4(),
            title,
            description: input.description.trim().to_string(),
            priority: input.priority.unwrap_or_default(),
            column_id,
            created_at: Utc::now(),
        })
    }

    /// Produce an edited copy. Identity, column membership, and creation
    /// time are preserved; title, description, and priority come from the
    /// input under the same validation as `create`.
    pub fn updated(&self, input: &TaskInput) -> FlowboardResult<Task> {
        let title = input.validated_title()?;
        Ok(Task {
            id: self.id,
            title,
            description: input.description.trim().to_string(),
            priority: input.priority.unwrap_or(self.priority),
            column_id: self.column_id,
            created_at: self.created_at,
        })
    }
}
