//! Task List View Component

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::use_todo;

/// The `<ul>` holding every task in insertion order
#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_todo();

    view! {
        <ul id=ctx.config(|c| c.list_id.clone()) class="task-list">
            <For
                each=move || ctx.tasks()
                key=|task| task.id
                children=move |task| view! { <TaskItem task=task /> }
            />
        </ul>
    }
}
