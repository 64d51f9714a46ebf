//! Error types for the task list model.

use crate::models::TaskId;

/// Errors from list operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task text is empty")]
    EmptyText,

    #[error("Task #{0} is not in the list")]
    NotFound(TaskId),

    #[error("No task ids left")]
    IdsExhausted,
}

/// Errors from loading or validating a `TodoConfig`
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
