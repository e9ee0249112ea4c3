//! Leptos DnD Utilities
//!
//! List reordering over native HTML5 drag events. One signal bundle
//! tracks the gesture for a whole list; handler factories wire up each
//! row. The dragged id lives in the signals, not in the DataTransfer
//! payload, so drop targets never parse event data.

use leptos::prelude::*;
use web_sys::DragEvent;

/// Shared state for one drag gesture
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Id of the row being dragged (None outside a gesture)
    pub dragging_id_read: ReadSignal<Option<u64>>,
    pub dragging_id_write: WriteSignal<Option<u64>>,
    /// Id of the row currently hovered as a drop target
    pub over_id_read: ReadSignal<Option<u64>>,
    pub over_id_write: WriteSignal<Option<u64>>,
}

/// Create the signal bundle for a drag-and-drop list
pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u64>);
    let (over_id_read, over_id_write) = signal(None::<u64>);

    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
    }
}

/// Clear all gesture state (after a drop or a cancelled drag)
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
}

/// Create dragstart handler for a draggable row.
/// Records the dragged id. The id is also mirrored into the DataTransfer
/// payload because some engines refuse to start a drag without one; the
/// signal stays the source of truth.
pub fn make_on_dragstart(dnd: DndSignals, id: u64) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        dnd.dragging_id_write.set(Some(id));

        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &id.to_string());
        }
    }
}

/// Create dragend handler.
/// Fires on the source row after a drop and when the gesture is
/// cancelled (Escape, drop outside any target).
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        end_drag(&dnd);
    }
}

/// Create dragover handler for a drop target row.
/// prevent_default marks the row as a valid target; a row never accepts
/// itself, and drags that started outside this list are ignored.
pub fn make_on_dragover(dnd: DndSignals, id: u64) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        let dragging = dnd.dragging_id_read.get_untracked();
        if dragging.is_none() || dragging == Some(id) {
            return;
        }

        ev.prevent_default();
        if dnd.over_id_read.get_untracked() != Some(id) {
            dnd.over_id_write.set(Some(id));
        }
    }
}

/// Create dragleave handler: clears the hover mark when the pointer
/// leaves this row.
pub fn make_on_dragleave(dnd: DndSignals, id: u64) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.over_id_read.get_untracked() == Some(id) {
            dnd.over_id_write.set(None);
        }
    }
}

/// Create drop handler for a target row.
/// Resolves (dragged, target) from the gesture signals, clears the
/// gesture, then hands the pair to `on_drop`.
pub fn make_on_drop<F>(dnd: DndSignals, target_id: u64, on_drop: F) -> impl Fn(DragEvent) + 'static
where
    F: Fn(u64, u64) + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();

        let dragged = dnd.dragging_id_read.get_untracked();
        end_drag(&dnd);

        if let Some(dragged_id) = dragged {
            on_drop(dragged_id, target_id);
        }
    }
}
