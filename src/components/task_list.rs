//! Task List Component
//!
//! Renders the visible slice of the task list, or the empty-state
//! message when nothing matches the filter. Dropping a row onto another
//! moves it in front of that row.

use leptos::prelude::*;
use leptos_dnd::create_dnd_signals;

use crate::components::task_row::TaskRow;
use crate::list;
use crate::models::TaskId;
use crate::store::{use_app_store, AppStateStoreFields};

/// The filtered task list
#[component]
pub fn TaskList(
    editing: ReadSignal<Option<TaskId>>,
    set_editing: WriteSignal<Option<TaskId>>,
) -> impl IntoView {
    let store = use_app_store();

    // One gesture state shared by every row
    let dnd = create_dnd_signals();

    let visible_tasks = move || list::visible(&store.tasks().read(), store.filter().get());

    view! {
        <div class="task-list">
            <Show when=move || visible_tasks().is_empty()>
                <div class="empty-state">
                    <p>"Nothing to do. Enjoy your free time!"</p>
                </div>
            </Show>

            <For
                each=visible_tasks
                key=|task| (task.id, task.text.clone(), task.completed)
                children=move |task| {
                    view! {
                        <TaskRow
                            task=task
                            editing=editing
                            set_editing=set_editing
                            dnd=dnd
                        />
                    }
                }
            />
        </div>
    }
}
