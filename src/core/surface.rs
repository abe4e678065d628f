//! Treffertest gegen getaggte Oberflächen der Szene.

use super::camera::Ray;
use glam::Vec3;

/// Tag der Standard-Zeichenebene.
pub const DRAW_PLANE_TAG: &str = "DrawPlane";

/// Treffer eines Strahls auf einer Oberfläche
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceHit {
    /// Trefferpunkt in Welt-Koordinaten
    pub world_point: Vec3,
    /// Kategorie-Tag der getroffenen Oberfläche
    pub surface_tag: String,
}

/// Schnittstelle zur Szene: Strahl gegen Oberflächen testen.
///
/// Ein Fehlschuss ist `None`, kein Fehler.
pub trait SurfaceHitTest {
    /// Nächster Treffer entlang des Strahls.
    fn raycast(&self, ray: &Ray) -> Option<SurfaceHit>;
}

/// Unendliche Ebene mit Tag
#[derive(Debug, Clone)]
pub struct TaggedPlane {
    /// Beliebiger Punkt auf der Ebene
    pub point: Vec3,
    /// Ebenen-Normale (wird normalisiert)
    pub normal: Vec3,
    /// Kategorie-Tag
    pub tag: String,
}

impl TaggedPlane {
    /// Erstellt eine Ebene durch `point` mit Normale `normal`.
    pub fn new(point: Vec3, normal: Vec3, tag: impl Into<String>) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            tag: tag.into(),
        }
    }

    /// Horizontale Bodenebene auf Höhe `height`.
    pub fn ground(height: f32, tag: impl Into<String>) -> Self {
        Self::new(Vec3::new(0.0, height, 0.0), Vec3::Y, tag)
    }

    /// Abstand entlang des Strahls bis zum Schnittpunkt (nur vorwärts).
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < 1e-6 {
            return None;
        }
        let distance = (self.point - ray.origin).dot(self.normal) / denom;
        (distance >= 0.0).then_some(distance)
    }
}

impl SurfaceHitTest for TaggedPlane {
    fn raycast(&self, ray: &Ray) -> Option<SurfaceHit> {
        let distance = self.intersect(ray)?;
        Some(SurfaceHit {
            world_point: ray.at(distance),
            surface_tag: self.tag.clone(),
        })
    }
}

/// Sammlung von Ebenen, liefert den nächstgelegenen Treffer.
#[derive(Debug, Clone, Default)]
pub struct SceneSurfaces {
    planes: Vec<TaggedPlane>,
}

impl SceneSurfaces {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine Ebene hinzu.
    pub fn with_plane(mut self, plane: TaggedPlane) -> Self {
        self.planes.push(plane);
        self
    }

    /// Fügt eine Ebene hinzu.
    pub fn add_plane(&mut self, plane: TaggedPlane) {
        self.planes.push(plane);
    }

    /// Anzahl registrierter Ebenen.
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Gibt `true` zurück wenn keine Ebenen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}

impl SurfaceHitTest for SceneSurfaces {
    fn raycast(&self, ray: &Ray) -> Option<SurfaceHit> {
        let (plane, distance) = self
            .planes
            .iter()
            .filter_map(|p| p.intersect(ray).map(|d| (p, d)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;
        Some(SurfaceHit {
            world_point: ray.at(distance),
            surface_tag: plane.tag.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_hit_from_above() {
        let plane = TaggedPlane::ground(0.0, DRAW_PLANE_TAG);
        let ray = Ray::new(Vec3::new(1.0, 5.0, 2.0), Vec3::NEG_Y);
        let hit = plane.raycast(&ray).expect("Treffer erwartet");
        assert_relative_eq!(hit.world_point.x, 1.0);
        assert_relative_eq!(hit.world_point.y, 0.0);
        assert_relative_eq!(hit.world_point.z, 2.0);
        assert_eq!(hit.surface_tag, DRAW_PLANE_TAG);
    }

    #[test]
    fn test_plane_behind_ray_is_miss() {
        let plane = TaggedPlane::ground(0.0, DRAW_PLANE_TAG);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(plane.raycast(&ray).is_none());
    }

    #[test]
    fn test_parallel_ray_is_miss() {
        let plane = TaggedPlane::ground(0.0, DRAW_PLANE_TAG);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
        assert!(plane.raycast(&ray).is_none());
    }

    #[test]
    fn test_scene_returns_nearest_surface() {
        let scene = SceneSurfaces::new()
            .with_plane(TaggedPlane::ground(0.0, DRAW_PLANE_TAG))
            .with_plane(TaggedPlane::ground(2.0, "Other"));
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y);
        let hit = scene.raycast(&ray).expect("Treffer erwartet");
        assert_eq!(hit.surface_tag, "Other");
        assert_relative_eq!(hit.world_point.y, 2.0);
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = SceneSurfaces::new();
        assert!(scene.is_empty());
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Y);
        assert!(scene.raycast(&ray).is_none());
    }
}
