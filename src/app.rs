//! Task List App
//!
//! Root component. Owns the store of one task list instance.

use leptos::prelude::*;
use reactive_stores::Store;
use task_list::TodoConfig;

use crate::components::{TaskForm, TaskListView};
use crate::context::TodoContext;
use crate::store::TodoState;

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    let store = Store::new(TodoState::default());
    let ctx = TodoContext::new(store, config);

    // Provide context to all children
    provide_context(ctx);

    view! {
        <main class="todo-app">
            <h1>"Lista de Tareas"</h1>

            <TaskForm />

            <TaskListView />

            <p class="task-count">
                {move || format!("{} tareas, {} completadas", ctx.tasks().len(), ctx.completed_count())}
            </p>
        </main>
    }
}
