//! Task Model
//!
//! A single entry of the task list and its rendered shape.

use crate::config::TodoConfig;

/// Identifier of a task, unique within one `TaskList`
pub type TaskId = u32;

/// One task in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Class attribute of the rendered `<li>`
    pub fn class_name(&self, config: &TodoConfig) -> String {
        if self.completed {
            config.completed_class.clone()
        } else {
            String::new()
        }
    }
}
