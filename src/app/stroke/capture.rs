//! Strich-Erfassung: Treffertest, Validierung, Session- und Linien-Pflege.

use super::session::{LiveCurveVisual, StrokeSession};
use crate::core::{Camera3D, SurfaceHitTest};
use crate::shared::SMOOTHING_BLEND;
use glam::{Vec2, Vec3};

/// Grund, warum ein Touch-Punkt nicht auf die Zeichenebene trifft.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HitRejection {
    /// Strahl trifft keine Oberfläche
    #[error("Strahl trifft keine Oberfläche")]
    Miss,
    /// Getroffene Oberfläche ist keine Zeichenebene
    #[error("Oberfläche '{tag}' ist keine Zeichenebene")]
    WrongSurface {
        /// Tag der getroffenen Oberfläche
        tag: String,
    },
    /// Trefferpunkt liegt im Welt-Ursprung (Sentinel für "kein Treffer")
    #[error("Trefferpunkt im Welt-Ursprung wird als Fehlschuss gewertet")]
    OriginSentinel,
}

/// Erfasst einen Strich aus Pointer-Positionen.
///
/// Die Kamera wird beim Erstellen übergeben, der Szenen-Treffertest pro
/// Aufruf. Fehlgeschlagene Treffertests brechen nur die jeweilige Operation
/// ab, es gibt keine Fehler nach außen.
#[derive(Debug, Clone)]
pub struct StrokeCapture {
    camera: Camera3D,
    drawable_tag: String,
    session: StrokeSession,
    visual: Option<LiveCurveVisual>,
}

impl StrokeCapture {
    /// Erstellt eine Erfassung für die gegebene Kamera und Zeichenebene.
    pub fn new(camera: Camera3D, drawable_tag: impl Into<String>) -> Self {
        Self {
            camera,
            drawable_tag: drawable_tag.into(),
            session: StrokeSession::new(),
            visual: None,
        }
    }

    /// Startet einen Strich, wenn der Touch die Zeichenebene trifft.
    ///
    /// Gibt `true` zurück wenn eine Session gestartet wurde.
    pub fn begin(&mut self, screen_pos: Vec2, scene: &dyn SurfaceHitTest) -> bool {
        let hit = match self.resolve_hit(screen_pos, scene) {
            Ok(hit) => hit,
            Err(reason) => {
                log::debug!("Strich-Start bei {:?} verworfen: {}", screen_pos, reason);
                return false;
            }
        };

        self.session.start(hit);
        self.visual = Some(LiveCurveVisual::new(hit));
        log::debug!("Strich gestartet bei {:?}", hit);
        true
    }

    /// Verlängert den aktiven Strich um einen Punkt.
    ///
    /// No-op ohne aktive Session. Gibt `true` zurück wenn ein Punkt
    /// angehängt wurde.
    pub fn extend(&mut self, screen_pos: Vec2, scene: &dyn SurfaceHitTest) -> bool {
        if !self.session.is_active() {
            return false;
        }
        let Some(visual) = self.visual.as_mut() else {
            return false;
        };

        let hit = match Self::validate_hit(&self.camera, &self.drawable_tag, screen_pos, scene) {
            Ok(hit) => hit,
            Err(reason) => {
                log::trace!("Strich-Punkt bei {:?} verworfen: {}", screen_pos, reason);
                return false;
            }
        };

        visual.push_smoothed(hit, SMOOTHING_BLEND);
        self.session.push(hit);
        true
    }

    /// Beendet den Strich. Die Punkte bleiben erhalten.
    ///
    /// Gibt `true` zurück wenn eine aktive Session eingefroren wurde.
    pub fn end(&mut self) -> bool {
        let was_active = self.session.freeze();
        if was_active {
            log::info!("Strich beendet: {} Punkte", self.session.len());
        }
        was_active
    }

    /// Bricht den Strich ab: eingefroren, aber nicht zur Ausrichtung freigegeben.
    pub fn cancel(&mut self) {
        if self.session.is_active() {
            log::info!("Strich abgebrochen ({} Punkte)", self.session.len());
        }
        self.session.abandon();
    }

    /// Übergibt die eingefrorenen Punkte des letzten Strichs (genau einmal).
    ///
    /// `None` solange die Session aktiv ist oder die Punkte bereits
    /// übergeben bzw. verworfen wurden.
    pub fn take_frozen_stroke(&mut self) -> Option<Vec<Vec3>> {
        self.session.hand_off()
    }

    /// Entfernt die Live-Linie. Gibt `true` zurück wenn eine existierte.
    pub fn discard_visual(&mut self) -> bool {
        self.visual.take().is_some()
    }

    /// Aktuelle Session (Rohpunkte).
    pub fn session(&self) -> &StrokeSession {
        &self.session
    }

    /// Live-Linie, falls vorhanden.
    pub fn visual(&self) -> Option<&LiveCurveVisual> {
        self.visual.as_ref()
    }

    /// Wird gerade gezeichnet?
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Kamera der Erfassung.
    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }

    /// Mutable Kamera (z.B. bei Viewport-Änderung).
    pub fn camera_mut(&mut self) -> &mut Camera3D {
        &mut self.camera
    }

    /// Tag der Zeichenebene.
    pub fn drawable_tag(&self) -> &str {
        &self.drawable_tag
    }

    /// Setzt den Tag der Zeichenebene.
    pub fn set_drawable_tag(&mut self, tag: impl Into<String>) {
        self.drawable_tag = tag.into();
    }

    fn resolve_hit(
        &self,
        screen_pos: Vec2,
        scene: &dyn SurfaceHitTest,
    ) -> Result<Vec3, HitRejection> {
        Self::validate_hit(&self.camera, &self.drawable_tag, screen_pos, scene)
    }

    fn validate_hit(
        camera: &Camera3D,
        drawable_tag: &str,
        screen_pos: Vec2,
        scene: &dyn SurfaceHitTest,
    ) -> Result<Vec3, HitRejection> {
        let ray = camera.screen_point_to_ray(screen_pos);
        let hit = scene.raycast(&ray).ok_or(HitRejection::Miss)?;
        if hit.surface_tag != drawable_tag {
            return Err(HitRejection::WrongSurface {
                tag: hit.surface_tag,
            });
        }
        // Bekannte Näherung: ein echter Treffer im Ursprung wird ebenfalls verworfen
        if hit.world_point == Vec3::ZERO {
            return Err(HitRejection::OriginSentinel);
        }
        Ok(hit.world_point)
    }
}
