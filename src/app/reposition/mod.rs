//! Kurven-getriebene Ausrichtung: Zielobjekte wandern entlang des Strichs.
//!
//! Der eingefrorene Strich definiert eine Bézier-Kurve über alle Punkte.
//! Objekt `i` von `k` bekommt den Kurvenpunkt `B(i / (k-1))`, projiziert auf
//! seine eigene Bewegungsebene (orthogonal zur Up-Achse), und wird über die
//! feste Dauer linear von seiner Start-Position dorthin bewegt.
//!
//! Aufgeteilt in:
//! - `task`     : RepositionTask (Zustandsmaschine einer Animation)
//! - `scheduler`: RepositionScheduler (Überlappungs-Strategie, Warteschlange)

mod scheduler;
mod task;

pub use scheduler::{RepositionScheduler, SubmitOutcome};
pub use task::{RepositionTask, TaskPhase};
