//! Strich-Session und geglättete Live-Linie.

use glam::Vec3;

/// Punktfolge des aktuellen (oder zuletzt beendeten) Strichs
#[derive(Debug, Clone)]
pub struct StrokeSession {
    /// Rohe Trefferpunkte in Touch-Reihenfolge
    points: Vec<Vec3>,
    /// true solange Punkte angehängt werden
    active: bool,
    /// Eingefrorene Punkte wurden bereits an die Ausrichtung übergeben
    handed_off: bool,
}

impl Default for StrokeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeSession {
    /// Erstellt eine leere, inaktive Session ohne übergebbare Punkte.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            active: false,
            handed_off: true,
        }
    }

    /// Startet einen neuen Strich; verwirft die Punkte des vorherigen.
    pub(crate) fn start(&mut self, first: Vec3) {
        self.points.clear();
        self.points.push(first);
        self.active = true;
        self.handed_off = false;
    }

    pub(crate) fn push(&mut self, point: Vec3) {
        debug_assert!(self.active, "Punkte nur in aktiver Session anhängen");
        self.points.push(point);
    }

    /// Friert die Session ein. Gibt `true` zurück wenn sie aktiv war.
    pub(crate) fn freeze(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// Übergibt die eingefrorenen Punkte genau einmal.
    pub(crate) fn hand_off(&mut self) -> Option<Vec<Vec3>> {
        if self.active || self.handed_off {
            return None;
        }
        self.handed_off = true;
        Some(self.points.clone())
    }

    /// Markiert die Punkte als verbraucht, ohne sie zu übergeben.
    pub(crate) fn abandon(&mut self) {
        self.active = false;
        self.handed_off = true;
    }

    /// Erfasste Rohpunkte.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Anzahl erfasster Rohpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte erfasst sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Werden gerade Punkte angehängt?
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Live-Linie: Render-Punkte mit Mittelpunkt-Glättung (Länge = Punktanzahl + 1)
#[derive(Debug, Clone)]
pub struct LiveCurveVisual {
    points: Vec<Vec3>,
    /// Index des zuletzt geschriebenen Punkts
    current_index: usize,
}

impl LiveCurveVisual {
    /// Zwei identische Startpunkte.
    pub(crate) fn new(first: Vec3) -> Self {
        Self {
            points: vec![first, first],
            current_index: 1,
        }
    }

    /// Hängt einen Slot an und schreibt den geglätteten Punkt.
    ///
    /// Der neue Punkt liegt bei `lerp(vorheriger, hit, blend)`. Existiert
    /// danach noch ein Slot, bekommt er den rohen Trefferpunkt als Spitze.
    pub(crate) fn push_smoothed(&mut self, hit: Vec3, blend: f32) {
        self.current_index += 1;
        self.points.resize(self.current_index + 1, hit);
        let previous = self.points[self.current_index - 1];
        self.points[self.current_index] = previous.lerp(hit, blend);
        if let Some(tip) = self.points.get_mut(self.current_index + 1) {
            *tip = hit;
        }
    }

    /// Render-Punkte der Linie.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Anzahl der Render-Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Linie keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
