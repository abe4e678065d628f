//! 3D-Perspektiv-Kamera für Screen-zu-Welt-Strahlen.

use glam::{Mat3, Quat, Vec2, Vec3};

/// Strahl in Welt-Koordinaten (Richtung normalisiert)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Startpunkt des Strahls
    pub origin: Vec3,
    /// Normalisierte Richtung
    pub direction: Vec3,
}

impl Ray {
    /// Erstellt einen Strahl; die Richtung wird normalisiert.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Punkt im Abstand `distance` entlang des Strahls.
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Perspektiv-Kamera (rechtshändig, blickt entlang lokal -Z)
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec3,
    /// Orientierung der Kamera
    pub rotation: Quat,
    /// Vertikaler Öffnungswinkel in Radiant
    pub fov_y: f32,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
}

impl Camera3D {
    /// Standard-Öffnungswinkel (60°).
    pub const DEFAULT_FOV_Y: f32 = std::f32::consts::FRAC_PI_3;

    /// Erstellt eine Kamera im Ursprung mit Blick entlang -Z.
    pub fn new(viewport_size: Vec2) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov_y: Self::DEFAULT_FOV_Y,
            viewport_size,
        }
    }

    /// Erstellt eine Kamera bei `eye` mit Blick auf `target`.
    pub fn looking_at(eye: Vec3, target: Vec3, up: Vec3, viewport_size: Vec2) -> Self {
        let mut camera = Self::new(viewport_size);
        camera.position = eye;
        camera.look_at(target, up);
        camera
    }

    /// Richtet die Kamera auf einen Punkt aus.
    ///
    /// Ist `up` parallel zur Blickrichtung, wird eine Ersatzachse gewählt.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let Some(forward) = (target - self.position).try_normalize() else {
            return;
        };
        let right = forward
            .cross(up)
            .try_normalize()
            .unwrap_or_else(|| forward.any_orthonormal_vector());
        let true_up = right.cross(forward);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, true_up, -forward));
    }

    /// Blickrichtung in Welt-Koordinaten.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    fn aspect(&self) -> f32 {
        self.viewport_size.x / self.viewport_size.y.max(1.0)
    }

    /// Konvertiert Screen-Koordinaten in einen Welt-Strahl.
    ///
    /// Screen-Ursprung unten links (wie Touch-Koordinaten), Y nach oben.
    pub fn screen_point_to_ray(&self, screen_pos: Vec2) -> Ray {
        let size = self.viewport_size.max(Vec2::ONE);
        let ndc = (screen_pos / size) * 2.0 - Vec2::ONE;
        let half_height = (self.fov_y * 0.5).tan();
        let local = Vec3::new(
            ndc.x * half_height * self.aspect(),
            ndc.y * half_height,
            -1.0,
        );
        Ray::new(self.position, self.rotation * local)
    }

    /// Projiziert einen Weltpunkt auf den Bildschirm.
    ///
    /// `None` wenn der Punkt hinter der Kamera liegt.
    pub fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        let local = self.rotation.inverse() * (world - self.position);
        if local.z >= -f32::EPSILON {
            return None;
        }
        let half_height = (self.fov_y * 0.5).tan();
        let depth = -local.z;
        let ndc = Vec2::new(
            local.x / (depth * half_height * self.aspect()),
            local.y / (depth * half_height),
        );
        Some((ndc + Vec2::ONE) * 0.5 * self.viewport_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn top_down() -> Camera3D {
        Camera3D::looking_at(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::ZERO,
            Vec3::NEG_Z,
            Vec2::new(800.0, 600.0),
        )
    }

    #[test]
    fn test_center_ray_points_forward() {
        let camera = top_down();
        let ray = camera.screen_point_to_ray(Vec2::new(400.0, 300.0));
        assert_relative_eq!(ray.direction.y, -1.0, epsilon = 1e-5);
        assert_relative_eq!(ray.origin.y, 10.0);
    }

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let camera = Camera3D::new(Vec2::new(100.0, 100.0));
        let f = camera.forward();
        assert_relative_eq!(f.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_world_to_screen_roundtrip_hits_point() {
        let camera = top_down();
        let world = Vec3::new(2.5, 0.0, -1.5);
        let screen = camera.world_to_screen(world).expect("Punkt vor der Kamera");
        let ray = camera.screen_point_to_ray(screen);
        // Schnitt mit y = 0
        let distance = -ray.origin.y / ray.direction.y;
        let hit = ray.at(distance);
        assert_relative_eq!(hit.x, world.x, epsilon = 1e-3);
        assert_relative_eq!(hit.z, world.z, epsilon = 1e-3);
    }

    #[test]
    fn test_world_to_screen_behind_camera() {
        let camera = top_down();
        assert!(camera.world_to_screen(Vec3::new(0.0, 20.0, 0.0)).is_none());
    }

    #[test]
    fn test_look_at_with_parallel_up_does_not_panic() {
        let mut camera = Camera3D::new(Vec2::new(640.0, 480.0));
        camera.position = Vec3::new(0.0, 5.0, 0.0);
        camera.look_at(Vec3::ZERO, Vec3::Y);
        assert_relative_eq!(camera.forward().y, -1.0, epsilon = 1e-5);
    }
}
