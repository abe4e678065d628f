//! Handler für Strich-Erfassung und Live-Linie.

use crate::app::AppState;
use crate::core::SurfaceHitTest;
use crate::render::LineStyle;
use glam::Vec2;

/// Startet einen Strich und zeigt die Live-Linie an.
pub fn begin(state: &mut AppState, scene: &dyn SurfaceHitTest, screen_pos: Vec2) {
    if state.capture.begin(screen_pos, scene) {
        sync_line(state);
    }
}

/// Verlängert den aktiven Strich.
pub fn extend(state: &mut AppState, scene: &dyn SurfaceHitTest, screen_pos: Vec2) {
    if state.capture.extend(screen_pos, scene) {
        sync_line(state);
    }
}

/// Beendet den aktiven Strich.
pub fn end(state: &mut AppState) {
    state.capture.end();
}

/// Verwirft den aktiven Strich, ohne ihn zu übergeben.
pub fn cancel(state: &mut AppState) {
    state.capture.cancel();
}

/// Entfernt die Live-Linie aus Erfassung und Renderer.
pub fn discard_visual(state: &mut AppState) {
    state.capture.discard_visual();
    state.line.dispose();
}

/// Überträgt die aktuellen Linienpunkte an den Renderer.
pub(crate) fn sync_line(state: &mut AppState) {
    let Some(visual) = state.capture.visual() else {
        return;
    };
    let style = LineStyle::from_options(&state.options);
    state.line.set_points(visual.points(), &style);
}
