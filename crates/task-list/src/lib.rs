//! Task List Model
//!
//! Browser-independent model behind the task list UI: the ordered list of
//! tasks, form submission rules and the frontend configuration.

mod config;
mod error;
mod list;
mod models;

pub use config::TodoConfig;
pub use error::{ConfigError, TaskError};
pub use list::TaskList;
pub use models::{Task, TaskId};
