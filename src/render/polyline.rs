//! Vertex-Generierung für die Live-Linie (Band aus Quads pro Segment).

use super::{LineRenderer, LineStyle};
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Vertex für Linien-Geometrie.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position im 3D-Raum
    pub position: [f32; 3],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl LineVertex {
    /// Erstellt einen neuen LineVertex.
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// In-Memory-Polylinie: hält Punkte und den daraus erzeugten Vertex-Buffer.
///
/// Das Band liegt in der Ebene orthogonal zu `facing` (Standard: Welt-Y,
/// passend zu einer horizontalen Zeichenebene).
#[derive(Debug, Clone)]
pub struct PolylineMesh {
    facing: Vec3,
    points: Vec<Vec3>,
    vertices: Vec<LineVertex>,
    visible: bool,
    /// Zähler für Buffer-Neuaufbauten (Diagnose)
    rebuilds: u64,
}

impl Default for PolylineMesh {
    fn default() -> Self {
        Self::new(Vec3::Y)
    }
}

impl PolylineMesh {
    /// Erstellt ein leeres Mesh mit gegebener Band-Normale.
    pub fn new(facing: Vec3) -> Self {
        Self {
            facing: facing.normalize_or_zero(),
            points: Vec::new(),
            vertices: Vec::new(),
            visible: false,
            rebuilds: 0,
        }
    }

    /// Zuletzt übergebene Linienpunkte.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Aktueller Vertex-Buffer (Dreiecksliste).
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Vertex-Buffer als Bytes für den GPU-Upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Anzahl der Buffer-Neuaufbauten seit Erstellung.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    fn rebuild(&mut self, style: &LineStyle) {
        self.vertices.clear();
        for pair in self.points.windows(2) {
            push_line_quad(
                &mut self.vertices,
                pair[0],
                pair[1],
                self.facing,
                style.width,
                style.color,
            );
        }
        self.rebuilds += 1;
    }
}

impl LineRenderer for PolylineMesh {
    fn set_points(&mut self, points: &[Vec3], style: &LineStyle) {
        self.points.clear();
        self.points.extend_from_slice(points);
        self.rebuild(style);
        self.visible = true;
    }

    fn dispose(&mut self) {
        if !self.visible {
            return;
        }
        self.points.clear();
        self.vertices.clear();
        self.visible = false;
        log::debug!("Live-Linie entfernt");
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Erzeugt ein Quad (2 Dreiecke) für ein Liniensegment mit gegebener Breite.
///
/// Segmente der Länge 0 (z.B. die beiden Startpunkte) erzeugen nichts.
fn push_line_quad(
    vertices: &mut Vec<LineVertex>,
    start: Vec3,
    end: Vec3,
    facing: Vec3,
    thickness: f32,
    color: [f32; 4],
) {
    let Some(dir) = (end - start).try_normalize() else {
        return;
    };
    let side = dir
        .cross(facing)
        .try_normalize()
        .unwrap_or_else(|| dir.any_orthonormal_vector());
    let perp = side * (thickness * 0.5);

    let v0 = start + perp;
    let v1 = start - perp;
    let v2 = end + perp;
    let v3 = end - perp;

    vertices.push(LineVertex::new(v0, color));
    vertices.push(LineVertex::new(v1, color));
    vertices.push(LineVertex::new(v2, color));

    vertices.push(LineVertex::new(v2, color));
    vertices.push(LineVertex::new(v1, color));
    vertices.push(LineVertex::new(v3, color));
}
