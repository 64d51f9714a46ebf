//! Task Item Component
//!
//! One `<li>` of the list: clicking the row toggles completion, the nested
//! button deletes the task.

use leptos::prelude::*;

use task_list::Task;

use crate::context::use_todo;

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_todo();

    let id = task.id;
    let delete_label = ctx.config(|c| c.delete_label.clone());

    view! {
        <li
            class=move || ctx.class_of(id)
            on:click=move |_| ctx.toggle_task(id)
        >
            {task.text}
            <button
                type="button"
                class="delete-btn"
                on:click=move |ev| {
                    // Keep the click from reaching the <li> toggle
                    ev.stop_propagation();
                    ctx.delete_task(id);
                }
            >
                {delete_label}
            </button>
        </li>
    }
}
