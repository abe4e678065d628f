//! Handler für die Zuordnung des zeichnenden Pointers.

use crate::app::AppState;

/// Merkt sich den Pointer, der den Strich führt.
pub fn claim(state: &mut AppState, pointer_id: u64) {
    if let Some(previous) = state.active_pointer.replace(pointer_id) {
        if previous != pointer_id {
            log::warn!("Pointer {} ersetzt noch aktiven Pointer {}", pointer_id, previous);
        }
    }
}

/// Gibt den Zeichen-Pointer frei.
pub fn release(state: &mut AppState) {
    state.active_pointer = None;
}
