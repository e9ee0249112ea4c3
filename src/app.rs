//! Ticklist Frontend App
//!
//! Main application component: loads persisted tasks, owns the store and
//! the controller, and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, NewTaskForm, TaskList};
use crate::controller::Controller;
use crate::list;
use crate::models::TaskId;
use crate::storage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Load once on mount; every later mutation re-saves the full list
    let tasks = storage::load();
    web_sys::console::log_1(&format!("[APP] Loaded {} tasks", tasks.len()).into());

    let store = Store::new(AppState::new(tasks));

    // Provide store and controller to all children
    provide_context(store);
    provide_context(Controller::new(store));

    // Which task is in inline-edit mode (transient, like the filter)
    let (editing, set_editing) = signal::<Option<TaskId>>(None);

    view! {
        <main class="task-app">
            <h1>"Ticklist"</h1>

            <NewTaskForm />

            <FilterBar />

            <TaskList
                editing=editing
                set_editing=set_editing
            />

            <p class="stats">{move || {
                let stats = list::stats(&store.tasks().read());
                format!(
                    "{} remaining of {} tasks ({} completed)",
                    stats.remaining, stats.total, stats.completed
                )
            }}</p>
        </main>
    }
}
