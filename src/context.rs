//! Application Context
//!
//! Task store and configuration of one app instance, provided via the Leptos
//! Context API so components never look up elements or state globally.

use leptos::prelude::*;
use log::warn;
use task_list::{Task, TaskId, TodoConfig};

use crate::store::{self, TodoStore};

#[derive(Clone, Copy)]
pub struct TodoContext {
    pub store: TodoStore,
    config: StoredValue<TodoConfig>,
}

impl TodoContext {
    pub fn new(store: TodoStore, config: TodoConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Read a config value
    pub fn config<T>(&self, f: impl FnOnce(&TodoConfig) -> T) -> T {
        self.config.with_value(f)
    }

    pub fn tasks(&self) -> Vec<Task> {
        store::store_tasks(&self.store)
    }

    pub fn completed_count(&self) -> usize {
        store::store_completed_count(&self.store)
    }

    /// Class attribute of a task's `<li>`, empty once the task is gone
    pub fn class_of(&self, id: TaskId) -> String {
        store::store_task(&self.store, id)
            .map(|task| self.config(|c| task.class_name(c)))
            .unwrap_or_default()
    }

    /// Add the trimmed input as a task; clears `input` only when a task was added
    pub fn submit(&self, input: &mut String) -> Option<TaskId> {
        store::store_submit(&self.store, input)
    }

    pub fn delete_task(&self, id: TaskId) {
        if let Err(e) = store::store_remove_task(&self.store, id) {
            warn!("[APP] Delete failed: {}", e);
        }
    }

    pub fn toggle_task(&self, id: TaskId) {
        if let Err(e) = store::store_toggle_task(&self.store, id) {
            warn!("[APP] Toggle failed: {}", e);
        }
    }
}

/// Get the app context
pub fn use_todo() -> TodoContext {
    expect_context::<TodoContext>()
}
