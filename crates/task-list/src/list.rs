//! Task List
//!
//! Ordered collection of tasks. Insertion order is display order; new tasks
//! are appended and nothing is ever reordered.

use log::{debug, warn};

use crate::error::TaskError;
use crate::models::{Task, TaskId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a form submission.
    ///
    /// The input is trimmed; a non-empty result becomes a new task and the
    /// input is cleared. Whitespace-only input adds nothing and is left as is.
    pub fn submit(&mut self, input: &mut String) -> Option<TaskId> {
        let text = input.trim();
        if text.is_empty() {
            debug!("[FORM] Ignoring empty submission");
            return None;
        }

        let id = self.add_task(text).ok()?;
        input.clear();
        Some(id)
    }

    /// Append a task to the end of the list
    pub fn add_task(&mut self, text: impl Into<String>) -> Result<TaskId, TaskError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(TaskError::EmptyText);
        }

        let id = self.next_id.checked_add(1).ok_or(TaskError::IdsExhausted)?;
        self.next_id = id;
        debug!("[TASKS] Added #{} {:?}", id, text);
        self.tasks.push(Task::new(id, text));
        Ok(id)
    }

    /// Remove a task, keeping the order of the rest
    pub fn remove_task(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let Some(index) = self.position(id) else {
            warn!("[TASKS] Remove: #{} not found", id);
            return Err(TaskError::NotFound(id));
        };
        debug!("[TASKS] Removed #{}", id);
        Ok(self.tasks.remove(index))
    }

    /// Flip the completed flag and return the new value
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            warn!("[TASKS] Toggle: #{} not found", id);
            return Err(TaskError::NotFound(id));
        };
        task.completed = !task.completed;
        debug!("[TASKS] #{} completed={}", id, task.completed);
        Ok(task.completed)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn last(&self) -> Option<&Task> {
        self.tasks.last()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}
