//! Handler für Laufzeit-Optionen.

use super::stroke;
use crate::app::AppState;
use crate::shared::DrawingOptions;

/// Übernimmt neue Optionen in Erfassung, Scheduler und Live-Linie.
pub fn apply(state: &mut AppState, options: DrawingOptions) {
    state
        .capture
        .set_drawable_tag(options.drawable_tag.clone());
    state
        .animations
        .configure(options.overlap_policy, options.max_queued_strokes);
    state.options = options;

    if state.line.is_visible() {
        stroke::sync_line(state);
    }
    log::info!("Optionen übernommen: {:?}", state.options);
}
