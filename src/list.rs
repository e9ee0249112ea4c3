//! List Operations
//!
//! Pure operations over the ordered task list. Every mutation goes
//! through these, so the controller stays a thin dispatch layer and the
//! semantics are testable without a browser.

use crate::models::{Filter, Stats, Task, TaskId};

/// Insert a new task at the front of the list.
/// Whitespace-only text is rejected and leaves the list untouched.
pub fn add_task(
    tasks: &mut Vec<Task>,
    text: &str,
    now_ms: u64,
    created_at: String,
) -> Option<TaskId> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let id = next_task_id(tasks, now_ms);
    tasks.insert(0, Task::new(id, text.to_string(), created_at));
    Some(id)
}

/// Fresh unique id: the current timestamp, bumped past existing ids when
/// two adds land in the same millisecond
fn next_task_id(tasks: &[Task], now_ms: u64) -> TaskId {
    let max_id = tasks.iter().map(|task| task.id).max().unwrap_or(0);
    now_ms.max(max_id + 1)
}

/// Flip completion on the matching task. Unknown ids change nothing.
pub fn toggle_completed(tasks: &mut [Task], id: TaskId) -> bool {
    tasks
        .iter_mut()
        .find(|task| task.id == id)
        .map(|task| task.completed = !task.completed)
        .is_some()
}

/// Replace the text of the matching task. Whitespace-only text abandons
/// the edit; unknown ids change nothing.
pub fn edit_text(tasks: &mut [Task], id: TaskId, new_text: &str) -> bool {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return false;
    }

    tasks
        .iter_mut()
        .find(|task| task.id == id)
        .map(|task| task.text = new_text.to_string())
        .is_some()
}

/// Remove the matching task. Unknown ids change nothing.
pub fn remove(tasks: &mut Vec<Task>, id: TaskId) -> bool {
    let len_before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != len_before
}

/// Move the dragged task immediately before the target task.
/// The target position is recomputed after the dragged task is taken
/// out, so dragging an item downward lands exactly where it was dropped.
/// Dropping a task on itself or naming an unknown id keeps the order.
pub fn reorder(tasks: &mut Vec<Task>, dragged_id: TaskId, target_id: TaskId) -> bool {
    if dragged_id == target_id {
        return false;
    }

    let from = match tasks.iter().position(|task| task.id == dragged_id) {
        Some(index) => index,
        None => return false,
    };
    let dragged = tasks.remove(from);

    match tasks.iter().position(|task| task.id == target_id) {
        Some(to) => {
            tasks.insert(to, dragged);
            true
        }
        None => {
            tasks.insert(from, dragged);
            false
        }
    }
}

/// Tasks visible under the filter, in list order
pub fn visible(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}

/// Completion counters over the full list
pub fn stats(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();

    Stats {
        total,
        completed,
        remaining: total - completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: TaskId, text: &str, completed: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed,
            created_at: format!("2024-01-01T00:00:{:02}.000Z", id % 60),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|task| task.id).collect()
    }

    #[test]
    fn test_add_task_prepends() {
        let mut tasks = vec![make_task(1, "First", false)];

        let id = add_task(
            &mut tasks,
            "Buy milk",
            1_000,
            "2024-01-02T00:00:00.000Z".to_string(),
        );

        assert!(id.is_some());
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].completed);
        assert_eq!(tasks[0].created_at, "2024-01-02T00:00:00.000Z");
        assert_eq!(tasks[1].id, 1);
    }

    #[test]
    fn test_add_task_trims_text() {
        let mut tasks = Vec::new();

        add_task(&mut tasks, "  Buy milk  ", 1_000, String::new());

        assert_eq!(tasks[0].text, "Buy milk");
    }

    #[test]
    fn test_add_empty_text_changes_nothing() {
        let mut tasks = vec![make_task(1, "Keep", false)];

        assert!(add_task(&mut tasks, "", 1_000, String::new()).is_none());
        assert!(add_task(&mut tasks, "   \t ", 1_000, String::new()).is_none());
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_same_millisecond_adds_get_distinct_ids() {
        let mut tasks = Vec::new();

        let first = add_task(&mut tasks, "A", 5_000, String::new()).unwrap();
        let second = add_task(&mut tasks, "B", 5_000, String::new()).unwrap();

        assert_eq!(first, 5_000);
        assert_eq!(second, 5_001);
        assert!(second > first);
    }

    #[test]
    fn test_id_uses_clock_once_past_collisions() {
        let mut tasks = vec![make_task(40, "Old", false)];

        let id = add_task(&mut tasks, "New", 9_000, String::new()).unwrap();

        assert_eq!(id, 9_000);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut tasks = vec![make_task(1, "T", false)];

        assert!(toggle_completed(&mut tasks, 1));
        assert!(tasks[0].completed);

        assert!(toggle_completed(&mut tasks, 1));
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_changes_nothing() {
        let mut tasks = vec![make_task(1, "T", false)];

        assert!(!toggle_completed(&mut tasks, 99));
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_edit_replaces_trimmed_text() {
        let mut tasks = vec![make_task(1, "Old", false)];

        assert!(edit_text(&mut tasks, 1, "  New  "));
        assert_eq!(tasks[0].text, "New");
    }

    #[test]
    fn test_edit_empty_text_abandons() {
        let mut tasks = vec![make_task(1, "Old", false)];

        assert!(!edit_text(&mut tasks, 1, "   "));
        assert_eq!(tasks[0].text, "Old");
    }

    #[test]
    fn test_edit_unknown_id_changes_nothing() {
        let mut tasks = vec![make_task(1, "Old", false)];

        assert!(!edit_text(&mut tasks, 2, "New"));
        assert_eq!(tasks[0].text, "Old");
    }

    #[test]
    fn test_edit_keeps_position_and_completion() {
        let mut tasks = vec![make_task(1, "A", false), make_task(2, "B", true)];

        assert!(edit_text(&mut tasks, 2, "B2"));

        assert_eq!(ids(&tasks), vec![1, 2]);
        assert!(tasks[1].completed);
        assert_eq!(tasks[1].text, "B2");
    }

    #[test]
    fn test_remove_deletes_only_match() {
        let mut tasks = vec![make_task(1, "A", false), make_task(2, "B", false)];

        assert!(remove(&mut tasks, 1));
        assert_eq!(ids(&tasks), vec![2]);
    }

    #[test]
    fn test_remove_unknown_id_changes_nothing() {
        let mut tasks = vec![make_task(1, "A", false)];

        assert!(!remove(&mut tasks, 99));
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_reorder_moves_before_target() {
        // Dragging 3 onto 1: [1, 2, 3] -> [3, 1, 2]
        let mut tasks = vec![
            make_task(1, "A", false),
            make_task(2, "B", false),
            make_task(3, "C", false),
        ];

        assert!(reorder(&mut tasks, 3, 1));
        assert_eq!(ids(&tasks), vec![3, 1, 2]);
    }

    #[test]
    fn test_reorder_downward_recomputes_target_position() {
        // Dragging 1 onto 3: taking 1 out shifts 3 left, so 1 lands
        // between 2 and 3
        let mut tasks = vec![
            make_task(1, "A", false),
            make_task(2, "B", false),
            make_task(3, "C", false),
        ];

        assert!(reorder(&mut tasks, 1, 3));
        assert_eq!(ids(&tasks), vec![2, 1, 3]);
    }

    #[test]
    fn test_reorder_preserves_task_set() {
        let mut tasks = vec![
            make_task(1, "A", false),
            make_task(2, "B", true),
            make_task(3, "C", false),
        ];
        let mut before = tasks.clone();
        before.sort_by_key(|task| task.id);

        reorder(&mut tasks, 2, 1);

        let mut after = tasks.clone();
        after.sort_by_key(|task| task.id);
        assert_eq!(before, after);
    }

    #[test]
    fn test_reorder_onto_self_changes_nothing() {
        let mut tasks = vec![make_task(1, "A", false), make_task(2, "B", false)];

        assert!(!reorder(&mut tasks, 1, 1));
        assert_eq!(ids(&tasks), vec![1, 2]);
    }

    #[test]
    fn test_reorder_unknown_ids_keep_order() {
        let mut tasks = vec![make_task(1, "A", false), make_task(2, "B", false)];

        assert!(!reorder(&mut tasks, 99, 1));
        assert!(!reorder(&mut tasks, 1, 99));
        assert_eq!(ids(&tasks), vec![1, 2]);
    }

    #[test]
    fn test_visible_honors_filter_and_order() {
        let tasks = vec![
            make_task(1, "A", false),
            make_task(2, "B", true),
            make_task(3, "C", false),
        ];

        assert_eq!(visible(&tasks, Filter::All), tasks);
        assert_eq!(ids(&visible(&tasks, Filter::Active)), vec![1, 3]);
        assert!(visible(&tasks, Filter::Active).iter().all(|t| !t.completed));
        assert_eq!(ids(&visible(&tasks, Filter::Completed)), vec![2]);
        assert!(visible(&tasks, Filter::Completed).iter().all(|t| t.completed));
    }

    #[test]
    fn test_stats_counters_add_up() {
        let tasks = vec![
            make_task(1, "A", false),
            make_task(2, "B", true),
            make_task(3, "C", true),
        ];

        let counters = stats(&tasks);

        assert_eq!(counters.total, 3);
        assert_eq!(counters.completed, 2);
        assert_eq!(counters.remaining, 1);
        assert_eq!(counters.remaining + counters.completed, counters.total);
    }

    #[test]
    fn test_stats_on_empty_list() {
        assert_eq!(
            stats(&[]),
            Stats {
                total: 0,
                completed: 0,
                remaining: 0,
            }
        );
    }

    #[test]
    fn test_add_toggle_filter_delete_scenario() {
        let mut tasks = Vec::new();

        let first = add_task(&mut tasks, "Pay rent", 1_000, String::new()).unwrap();
        let second = add_task(&mut tasks, "Call mom", 2_000, String::new()).unwrap();
        assert_eq!(ids(&tasks), vec![second, first]);

        toggle_completed(&mut tasks, second);
        assert_eq!(ids(&visible(&tasks, Filter::Completed)), vec![second]);
        assert_eq!(ids(&visible(&tasks, Filter::Active)), vec![first]);

        remove(&mut tasks, first);
        assert_eq!(ids(&tasks), vec![second]);
        assert_eq!(tasks[0].text, "Call mom");
    }
}
