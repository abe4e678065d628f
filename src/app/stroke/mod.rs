//! Strich-Erfassung: Touch-Punkte → validierte Weltpunkte + geglättete Live-Linie.
//!
//! **Ablauf:** `begin` (Treffer auf Zeichenebene startet Session) →
//! `extend` pro Bewegung (roher Punkt in die Session, geglätteter Punkt in
//! die Linie) → `end` friert ein → `take_frozen_stroke` übergibt die Punkte
//! an die Ausrichtung → `discard_visual` entfernt die Linie.
//!
//! Aufgeteilt in:
//! - `session`: StrokeSession (Rohpunkte) und LiveCurveVisual (Render-Punkte)
//! - `capture`: StrokeCapture mit Treffertest und Validierung

mod capture;
mod session;

pub use capture::{HitRejection, StrokeCapture};
pub use session::{LiveCurveVisual, StrokeSession};
