//! Task List Frontend
//!
//! Leptos components, store and startup code of the task list app.

pub mod app;
pub mod components;
pub mod context;
pub mod logging;
pub mod mount;
pub mod store;
