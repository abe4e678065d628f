//! Application State: zentrale Datenhaltung.

use super::reposition::RepositionScheduler;
use super::stroke::StrokeCapture;
use super::CommandLog;
use crate::core::{Camera3D, TargetObject};
use crate::render::{LineRenderer, PolylineMesh};
use crate::shared::DrawingOptions;

/// Gesamter Anwendungszustand einer Zeichen-Szene.
pub struct AppState {
    /// Strich-Erfassung (Kamera, Session, Live-Linie)
    pub capture: StrokeCapture,
    /// Auszurichtende Objekte in fester Reihenfolge
    pub targets: Vec<Box<dyn TargetObject>>,
    /// Laufende und wartende Ausrichtungs-Animationen
    pub animations: RepositionScheduler,
    /// Renderer für die Live-Linie
    pub line: Box<dyn LineRenderer>,
    /// Laufzeit-Optionen
    pub options: DrawingOptions,
    /// Ausgeführte Commands
    pub command_log: CommandLog,
    /// ID des Pointers, der gerade zeichnet
    pub active_pointer: Option<u64>,
}

impl AppState {
    /// Erstellt einen leeren State mit `PolylineMesh` als Linien-Renderer.
    pub fn new(camera: Camera3D, options: DrawingOptions) -> Self {
        Self::with_renderer(camera, options, Box::new(PolylineMesh::default()))
    }

    /// Erstellt einen leeren State mit eigenem Linien-Renderer.
    pub fn with_renderer(
        camera: Camera3D,
        options: DrawingOptions,
        line: Box<dyn LineRenderer>,
    ) -> Self {
        let capture = StrokeCapture::new(camera, options.drawable_tag.clone());
        let animations = RepositionScheduler::new(options.overlap_policy, options.max_queued_strokes);
        Self {
            capture,
            targets: Vec::new(),
            animations,
            line,
            options,
            command_log: CommandLog::new(),
            active_pointer: None,
        }
    }

    /// Hängt ein Zielobjekt an. Die Reihenfolge bestimmt den Kurvenparameter.
    pub fn register_target(&mut self, target: Box<dyn TargetObject>) {
        self.targets.push(target);
    }

    /// Anzahl registrierter Zielobjekte.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Läuft gerade eine Ausrichtung oder wartet eine?
    pub fn is_repositioning(&self) -> bool {
        !self.animations.is_idle()
    }
}
