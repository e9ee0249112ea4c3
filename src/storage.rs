//! Persistence Adapter
//!
//! Mirrors the task list into browser localStorage as one JSON array
//! under a single key. Loading tolerates anything: missing storage, a
//! missing key or corrupt data all come back as an empty list.

use crate::models::Task;

const STORAGE_KEY: &str = "tasks";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Load the persisted list
pub fn load() -> Vec<Task> {
    let raw = local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

    let json = match raw {
        Some(json) => json,
        None => return Vec::new(),
    };

    match decode(&json) {
        Ok(tasks) => tasks,
        Err(e) => {
            web_sys::console::error_1(
                &format!("[STORE] Corrupt task data, starting empty: {}", e).into(),
            );
            Vec::new()
        }
    }
}

/// Persist the full list, replacing whatever was stored before
pub fn save(tasks: &[Task]) {
    let storage = match local_storage() {
        Some(storage) => storage,
        None => {
            web_sys::console::error_1(&"[STORE] localStorage unavailable, not saving".into());
            return;
        }
    };

    match serde_json::to_string(tasks) {
        Ok(json) => {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                web_sys::console::error_1(&"[STORE] Failed to write tasks".into());
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[STORE] Failed to serialize tasks: {}", e).into());
        }
    }
}

/// Parse a persisted JSON array. Kept separate from `load` so corruption
/// handling stays testable off-browser.
fn decode(json: &str) -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_str(json)
}
