//! Handler für die Ausrichtung der Zielobjekte.

use crate::app::AppState;

/// Übergibt den eingefrorenen Strich an den Scheduler.
///
/// Ohne eingefrorenen, noch nicht übergebenen Strich passiert nichts.
pub fn start(state: &mut AppState) {
    let Some(points) = state.capture.take_frozen_stroke() else {
        log::debug!("Kein eingefrorener Strich zum Ausrichten");
        return;
    };
    state.animations.submit(points, &state.targets);
}

/// Schreitet alle Animationen um `dt` fort.
pub fn tick(state: &mut AppState, dt: f32) {
    state.animations.tick(dt, &mut state.targets);
}
