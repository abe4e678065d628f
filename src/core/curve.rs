//! Geometrie-Berechnungen für die Strich-Kurve (De-Casteljau, Ebenen-Projektion).

use glam::Vec3;

/// Evaluiert die Bézier-Kurve mit beliebig vielen Kontrollpunkten bei `t`.
///
/// De-Casteljau: pro Runde werden `n` Punkte paarweise linear interpoliert
/// und auf `n - 1` Punkte reduziert, bis ein Punkt übrig bleibt.
///
/// Gibt `None` zurück wenn `points` leer ist.
pub fn de_casteljau(points: &[Vec3], t: f32) -> Option<Vec3> {
    let mut scratch = points.to_vec();
    de_casteljau_in_place(&mut scratch, t)
}

/// Wie [`de_casteljau`], aber auf einem wiederverwendbaren Buffer.
///
/// Der Buffer-Inhalt ist danach verbraucht (enthält Zwischenstände).
pub fn de_casteljau_in_place(scratch: &mut [Vec3], t: f32) -> Option<Vec3> {
    let n = scratch.len();
    if n == 0 {
        return None;
    }
    for remaining in (1..n).rev() {
        for i in 0..remaining {
            scratch[i] = scratch[i].lerp(scratch[i + 1], t);
        }
    }
    Some(scratch[0])
}

/// Projiziert `v` auf die Ebene orthogonal zu `normal`.
///
/// Entspricht `v - n * dot(v, n)` mit normalisiertem `n`. Eine Normale
/// der Länge 0 definiert keine Ebene → `v` bleibt unverändert.
pub fn project_on_plane(v: Vec3, normal: Vec3) -> Vec3 {
    let Some(n) = normal.try_normalize() else {
        return v;
    };
    v - n * v.dot(n)
}

/// Kurvenparameter für das Objekt `index` von `count` Zielobjekten.
///
/// Gleichmäßig nach Index verteilt (`i / (k - 1)`), nicht nach Bogenlänge.
/// Ein einzelnes Objekt bekommt `t = 0` (Kurvenanfang).
pub fn parameter_for_index(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    index as f32 / (count - 1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn test_single_point_is_returned_for_any_t() {
        let p = Vec3::new(1.5, -2.0, 7.25);
        for t in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(de_casteljau(&[p], t), Some(p));
        }
    }

    #[test]
    fn test_empty_input_has_no_point() {
        assert_eq!(de_casteljau(&[], 0.5), None);
    }

    #[test]
    fn test_endpoints() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 4.0, 1.0),
            Vec3::new(7.0, -2.0, 5.0),
            Vec3::new(10.0, 0.0, 2.0),
        ];
        assert_vec3_eq(de_casteljau(&points, 0.0).unwrap(), points[0]);
        assert_vec3_eq(de_casteljau(&points, 1.0).unwrap(), points[3]);
    }

    #[test]
    fn test_matches_closed_form_cubic() {
        // B(0.5) = 0.125*P0 + 0.375*P1 + 0.375*P2 + 0.125*P3
        let p = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 10.0, 0.0),
        ];
        let mid = de_casteljau(&p, 0.5).unwrap();
        assert_vec3_eq(mid, Vec3::new(5.0, 5.0, 0.0));
    }

    #[test]
    fn test_translation_invariance() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 5.0, -1.0),
            Vec3::new(4.0, -3.0, 2.0),
            Vec3::new(6.0, 1.0, 0.5),
            Vec3::new(9.0, 0.0, 3.0),
        ];
        let offset = Vec3::new(-12.5, 3.0, 40.0);
        let moved: Vec<Vec3> = points.iter().map(|p| *p + offset).collect();

        for t in [0.0, 0.2, 0.5, 0.77, 1.0] {
            let a = de_casteljau(&points, t).unwrap();
            let b = de_casteljau(&moved, t).unwrap();
            assert_vec3_eq(b, a + offset);
        }
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let points = [Vec3::ZERO, Vec3::X, Vec3::X * 2.0];
        let p = de_casteljau(&points, 0.25).unwrap();
        assert_vec3_eq(p, Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_in_place_reuses_buffer() {
        let mut buf = vec![Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)];
        let p = de_casteljau_in_place(&mut buf, 0.25).unwrap();
        assert_vec3_eq(p, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_project_on_plane_removes_up_component() {
        let v = Vec3::new(3.0, 5.0, -2.0);
        let projected = project_on_plane(v, Vec3::Y);
        assert_vec3_eq(projected, Vec3::new(3.0, 0.0, -2.0));
    }

    #[test]
    fn test_project_on_plane_normalizes_up() {
        let v = Vec3::new(1.0, 4.0, 0.0);
        let projected = project_on_plane(v, Vec3::new(0.0, 10.0, 0.0));
        assert_vec3_eq(projected, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_project_on_plane_zero_normal_keeps_vector() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(project_on_plane(v, Vec3::ZERO), v);
    }

    #[test]
    fn test_parameter_for_index() {
        assert_relative_eq!(parameter_for_index(0, 3), 0.0);
        assert_relative_eq!(parameter_for_index(1, 3), 0.5);
        assert_relative_eq!(parameter_for_index(2, 3), 1.0);
    }

    #[test]
    fn test_parameter_single_target_is_curve_start() {
        assert_eq!(parameter_for_index(0, 1), 0.0);
    }
}
