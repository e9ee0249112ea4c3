//! Action Controller
//!
//! Single dispatch point for every state change. Components hand an
//! Action to the controller; the controller applies it through the pure
//! list operations and mirrors successful mutations to storage. Filter
//! changes are transient and skip persistence.

use leptos::prelude::*;

use crate::list;
use crate::models::{Filter, TaskId};
use crate::storage;
use crate::store::{AppStateStoreFields, AppStore};

/// Every user interaction that can change state
#[derive(Debug, Clone)]
pub enum Action {
    Add(String),
    Toggle(TaskId),
    Edit(TaskId, String),
    Delete(TaskId),
    Reorder { dragged: TaskId, target: TaskId },
    SetFilter(Filter),
}

/// Copyable handle that dispatches actions against the app store
#[derive(Clone, Copy)]
pub struct Controller {
    store: AppStore,
}

impl Controller {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Apply one action. Rejected input (empty text, unknown ids) changes
    /// and persists nothing.
    pub fn dispatch(&self, action: Action) {
        match action {
            Action::Add(text) => {
                let mut tasks = self.store.tasks().write();
                if list::add_task(&mut tasks, &text, now_millis(), now_iso()).is_some() {
                    storage::save(&tasks);
                }
            }
            Action::Toggle(id) => {
                let mut tasks = self.store.tasks().write();
                if list::toggle_completed(&mut tasks, id) {
                    storage::save(&tasks);
                }
            }
            Action::Edit(id, new_text) => {
                let mut tasks = self.store.tasks().write();
                if list::edit_text(&mut tasks, id, &new_text) {
                    storage::save(&tasks);
                }
            }
            Action::Delete(id) => {
                let mut tasks = self.store.tasks().write();
                if list::remove(&mut tasks, id) {
                    storage::save(&tasks);
                }
            }
            Action::Reorder { dragged, target } => {
                let mut tasks = self.store.tasks().write();
                if list::reorder(&mut tasks, dragged, target) {
                    storage::save(&tasks);
                }
            }
            Action::SetFilter(filter) => {
                self.store.filter().set(filter);
            }
        }
    }
}

/// Get the controller from context
pub fn use_controller() -> Controller {
    expect_context::<Controller>()
}

fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
