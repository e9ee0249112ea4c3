//! New Task Form Component
//!
//! Text entry plus Add button. Submitting the form (button click or
//! Enter) creates a task; whitespace-only input is dropped before it
//! reaches the controller and the field keeps its text.

use leptos::prelude::*;

use crate::controller::{use_controller, Action};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let controller = use_controller();
    let (new_text, set_new_text) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = new_text.get();
        if text.trim().is_empty() {
            return;
        }

        controller.dispatch(Action::Add(text));
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                class="new-task-input"
                placeholder="Add a new task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
