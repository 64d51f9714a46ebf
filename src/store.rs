//! Task Store
//!
//! Uses Leptos reactive_stores so the list view re-renders on every change.

use leptos::prelude::*;
use reactive_stores::Store;
use task_list::{Task, TaskError, TaskId, TaskList};

/// Reactive state of one task list instance
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All tasks in display order
    pub list: TaskList,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the tasks, tracked
pub fn store_tasks(store: &TodoStore) -> Vec<Task> {
    store.list().read().tasks().to_vec()
}

/// Current state of one task, tracked
pub fn store_task(store: &TodoStore, id: TaskId) -> Option<Task> {
    store.list().read().get(id).cloned()
}

/// Number of completed tasks, tracked
pub fn store_completed_count(store: &TodoStore) -> usize {
    store.list().read().completed_count()
}

/// Run a form submission against the list; see `TaskList::submit`
pub fn store_submit(store: &TodoStore, input: &mut String) -> Option<TaskId> {
    store.list().write().submit(input)
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &TodoStore, id: TaskId) -> Result<Task, TaskError> {
    store.list().write().remove_task(id)
}

/// Toggle a task's completed flag by ID
pub fn store_toggle_task(store: &TodoStore, id: TaskId) -> Result<bool, TaskError> {
    store.list().write().toggle_completed(id)
}
