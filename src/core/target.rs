//! Zielobjekte, die entlang der Strich-Kurve ausgerichtet werden.

use glam::Vec3;

/// Handle auf ein extern verwaltetes, verschiebbares Objekt.
///
/// Der Kern erzeugt oder zerstört keine Objekte, er liest und schreibt
/// nur die Position während einer Animation.
pub trait TargetObject {
    /// Aktuelle Welt-Position
    fn position(&self) -> Vec3;

    /// Setzt die Welt-Position
    fn set_position(&mut self, position: Vec3);

    /// Lokale "Up"-Achse; definiert die Bewegungsebene des Objekts
    fn up(&self) -> Vec3;
}

/// Einfaches Zielobjekt mit Position und fester Up-Achse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBody {
    /// Welt-Position
    pub position: Vec3,
    /// Up-Achse (Normale der Bewegungsebene)
    pub up: Vec3,
}

impl TargetBody {
    /// Erstellt ein Objekt mit Welt-Y als Up-Achse.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            up: Vec3::Y,
        }
    }

    /// Erstellt ein Objekt mit eigener Up-Achse.
    pub fn with_up(position: Vec3, up: Vec3) -> Self {
        Self { position, up }
    }
}

impl TargetObject for TargetBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn up(&self) -> Vec3 {
        self.up
    }
}
