//! Render-Vertrag für die Live-Linie.
//!
//! Der Kern übergibt die geglätteten Linienpunkte pro Änderung komplett
//! an einen `LineRenderer`. `PolylineMesh` ist die mitgelieferte
//! Implementierung, die einen uploadfertigen Vertex-Buffer hält.

mod polyline;

pub use polyline::{LineVertex, PolylineMesh};

use glam::Vec3;

/// Darstellungs-Parameter der Live-Linie
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Linienbreite in Welteinheiten
    pub width: f32,
    /// Farbe (RGBA)
    pub color: [f32; 4],
}

impl LineStyle {
    /// Übernimmt Breite und Farbe aus den Optionen.
    pub fn from_options(options: &crate::shared::DrawingOptions) -> Self {
        Self {
            width: options.line_width_world,
            color: options.line_color,
        }
    }
}

/// Schnittstelle zum Linien-Renderer (Polylinie aus Weltpunkten).
pub trait LineRenderer {
    /// Ersetzt die komplette Punktfolge der Linie.
    fn set_points(&mut self, points: &[Vec3], style: &LineStyle);

    /// Entfernt die Linie. Mehrfacher Aufruf ist erlaubt.
    fn dispose(&mut self);

    /// Ist aktuell eine Linie sichtbar?
    fn is_visible(&self) -> bool;
}
