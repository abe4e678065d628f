//! Einzelne Ausrichtungs-Animation als explizite Zustandsmaschine.

use crate::core::curve::de_casteljau_in_place;
use crate::core::{de_casteljau, parameter_for_index, project_on_plane, TargetObject};
use crate::shared::REPOSITION_DURATION;
use glam::Vec3;

/// Phase einer Ausrichtungs-Animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPhase {
    /// Läuft, wartet auf den nächsten Tick
    Running,
    /// Dauer erreicht, Endpositionen geschrieben
    Finished,
}

/// Bewegt Zielobjekte über die feste Dauer zu ihren Kurvenpunkten.
///
/// Start-Positionen werden beim Erstellen festgehalten und ändern sich
/// während der Laufzeit nicht.
#[derive(Debug, Clone)]
pub struct RepositionTask {
    /// Eingefrorene Strich-Punkte (nur lesend)
    points: Vec<Vec3>,
    /// Kurvenpunkt B(t_i) pro Objekt
    curve_targets: Vec<Vec3>,
    /// Positionen beim Start der Animation
    initial_positions: Vec<Vec3>,
    elapsed: f32,
    duration: f32,
    phase: TaskPhase,
}

impl RepositionTask {
    /// Erstellt die Animation für `points` und alle `targets`.
    ///
    /// `None` bei weniger als 2 Punkten oder ohne Zielobjekte.
    pub fn new(points: Vec<Vec3>, targets: &[Box<dyn TargetObject>]) -> Option<Self> {
        if points.len() < 2 || targets.is_empty() {
            return None;
        }

        let count = targets.len();
        let mut scratch = Vec::with_capacity(points.len());
        let curve_targets = (0..count)
            .map(|i| {
                scratch.clear();
                scratch.extend_from_slice(&points);
                de_casteljau_in_place(&mut scratch, parameter_for_index(i, count))
            })
            .collect::<Option<Vec<_>>>()?;
        let initial_positions = targets.iter().map(|t| t.position()).collect();

        Some(Self {
            points,
            curve_targets,
            initial_positions,
            elapsed: 0.0,
            duration: REPOSITION_DURATION,
            phase: TaskPhase::Running,
        })
    }

    /// Führt einen Tick aus und schreibt die Zwischenpositionen.
    ///
    /// Die verstrichene Zeit wird auf die Dauer begrenzt, der letzte Tick
    /// schreibt exakt die Endpositionen. Negative oder nicht-endliche
    /// Deltas zählen als 0.
    pub fn step(&mut self, dt: f32, targets: &mut [Box<dyn TargetObject>]) -> TaskPhase {
        if self.phase == TaskPhase::Finished {
            return self.phase;
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let t = self.progress();

        for (i, target) in targets.iter_mut().enumerate().take(self.initial_positions.len()) {
            let initial = self.initial_positions[i];
            let relative = self.curve_targets[i] - initial;
            let projected = project_on_plane(relative, target.up());
            target.set_position(initial + projected * t);
        }

        if self.elapsed >= self.duration {
            self.phase = TaskPhase::Finished;
            log::info!(
                "Ausrichtung abgeschlossen: {} Objekte entlang {} Punkten",
                self.initial_positions.len(),
                self.points.len()
            );
        }
        self.phase
    }

    /// Normierter Fortschritt in [0, 1].
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> TaskPhase {
        self.phase
    }

    /// Ist die Animation abgeschlossen?
    pub fn is_finished(&self) -> bool {
        self.phase == TaskPhase::Finished
    }

    /// Eingefrorene Strich-Punkte.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Start-Positionen der Objekte.
    pub fn initial_positions(&self) -> &[Vec3] {
        &self.initial_positions
    }

    /// Kurvenpunkt pro Objekt (vor der Ebenen-Projektion).
    pub fn curve_targets(&self) -> &[Vec3] {
        &self.curve_targets
    }

    /// Evaluiert die Strich-Kurve bei `t` (für Vorschau/Diagnose).
    pub fn evaluate(&self, t: f32) -> Option<Vec3> {
        de_casteljau(&self.points, t)
    }
}
