//! Task Row Component
//!
//! A single task: completion checkbox, text (or the inline editor),
//! edit and delete buttons. The whole row is a drag source and a drop
//! target for reordering.

use leptos::prelude::*;
use leptos_dnd::*;
use wasm_bindgen::JsCast;

use crate::controller::{use_controller, Action};
use crate::models::{Task, TaskId};

/// One row in the task list
#[component]
pub fn TaskRow(
    task: Task,
    editing: ReadSignal<Option<TaskId>>,
    set_editing: WriteSignal<Option<TaskId>>,
    dnd: DndSignals,
) -> impl IntoView {
    let controller = use_controller();

    let id = task.id;
    let completed = task.completed;
    let text = task.text.clone();

    // Draft text for the inline editor, reseeded every time editing starts
    let (draft, set_draft) = signal(task.text.clone());
    let edit_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let is_editing = move || editing.get() == Some(id);

    // Focus the editor once its input is mounted
    Effect::new(move |_| {
        if is_editing() {
            if let Some(input) = edit_input.get() {
                let _ = input.focus();
            }
        }
    });

    let enter_edit = {
        let seed = task.text.clone();
        move || {
            set_draft.set(seed.clone());
            set_editing.set(Some(id));
        }
    };
    let enter_edit_btn = enter_edit.clone();

    // Shared by blur and Enter; clearing the editing flag first keeps the
    // blur that follows Enter's re-render from committing twice
    let commit_edit = move || {
        if editing.get_untracked() != Some(id) {
            return;
        }
        set_editing.set(None);
        controller.dispatch(Action::Edit(id, draft.get_untracked()));
    };

    // DnD wiring for this row
    let on_dragstart = make_on_dragstart(dnd, id);
    let on_dragend = make_on_dragend(dnd);
    let on_dragover = make_on_dragover(dnd, id);
    let on_dragleave = make_on_dragleave(dnd, id);
    let on_drop = make_on_drop(dnd, id, move |dragged, target| {
        web_sys::console::log_1(
            &format!("[DND] Drop: dragged={} onto target={}", dragged, target).into(),
        );
        controller.dispatch(Action::Reorder { dragged, target });
    });

    let row_class = move || {
        let mut class = String::from("task-row");
        if completed {
            class.push_str(" completed");
        }
        if dnd.dragging_id_read.get() == Some(id) {
            class.push_str(" dragging");
        }
        if dnd.over_id_read.get() == Some(id) {
            class.push_str(" drag-over");
        }
        class
    };

    view! {
        <div
            class=row_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            // Checkbox
            <input
                type="checkbox"
                class="toggle"
                checked=completed
                on:change=move |_| controller.dispatch(Action::Toggle(id))
            />

            // Text, swapped for the editor while this row is edited
            {move || if is_editing() {
                view! {
                    <input
                        type="text"
                        class="edit-input"
                        node_ref=edit_input
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_draft.set(input.value());
                        }
                        on:blur=move |_| commit_edit()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                commit_edit();
                            }
                        }
                    />
                }.into_any()
            } else {
                let on_text_click = enter_edit.clone();
                view! {
                    <span class="task-text" on:click=move |_| on_text_click()>
                        {text.clone()}
                    </span>
                }.into_any()
            }}

            // Edit button
            <button class="edit-btn" on:click=move |ev| {
                ev.stop_propagation();
                enter_edit_btn();
            }>"✎"</button>

            // Delete button
            <button class="delete-btn" on:click=move |ev| {
                ev.stop_propagation();
                controller.dispatch(Action::Delete(id));
            }>"×"</button>
        </div>
    }
}
