//! UI Components
//!
//! Leptos components of the task list.

mod task_form;
mod task_item;
mod task_list_view;

pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list_view::TaskListView;
