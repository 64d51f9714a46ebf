//! Task Form Component
//!
//! Text input plus submit button. Submitting adds the trimmed text as a task.

use leptos::prelude::*;
use log::debug;

use crate::context::use_todo;

/// Form for creating new tasks
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_todo();

    let (new_text, set_new_text) = signal(String::new());

    let submit_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut input = new_text.get_untracked();
        // Whitespace-only input stays in the field
        if let Some(id) = ctx.submit(&mut input) {
            debug!("[FORM] Submitted task #{}", id);
            set_new_text.set(input);
        }
    };

    view! {
        <form id=ctx.config(|c| c.form_id.clone()) class="todo-form" on:submit=submit_task>
            <input
                type="text"
                id=ctx.config(|c| c.input_id.clone())
                placeholder=ctx.config(|c| c.placeholder.clone())
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">{ctx.config(|c| c.submit_label.clone())}</button>
        </form>
    }
}
