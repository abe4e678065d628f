use crate::shared::DrawingOptions;
use glam::Vec2;

/// Phase eines Pointer-/Touch-Ereignisses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Finger aufgesetzt / Maustaste gedrückt
    Began,
    /// Position geändert
    Moved,
    /// Finger gehoben / Maustaste losgelassen
    Ended,
    /// Vom System abgebrochen (z.B. Geste, Fokusverlust)
    Cancelled,
}

/// App-Intents sind Eingaben aus Host/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Pointer-Ereignis in Bildschirm-Koordinaten (Ursprung unten links)
    Pointer {
        pointer_id: u64,
        phase: PointerPhase,
        screen_pos: Vec2,
    },
    /// Neue Laufzeit-Optionen übernehmen
    OptionsChanged { options: DrawingOptions },
}
