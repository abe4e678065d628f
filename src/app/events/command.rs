use crate::shared::DrawingOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Pointer als Zeichen-Pointer übernehmen
    ClaimPointer { pointer_id: u64 },
    /// Zeichen-Pointer freigeben
    ReleasePointer,
    /// Strich an Bildschirmposition starten
    BeginStroke { screen_pos: Vec2 },
    /// Aktiven Strich verlängern
    ExtendStroke { screen_pos: Vec2 },
    /// Aktiven Strich beenden (Punkte einfrieren)
    EndStroke,
    /// Aktiven Strich verwerfen, ohne Ausrichtung
    CancelStroke,
    /// Eingefrorenen Strich an die Ausrichtung übergeben
    StartReposition,
    /// Live-Linie entfernen
    DiscardVisual,
    /// Laufzeit-Optionen übernehmen
    ApplyOptions { options: DrawingOptions },
}
