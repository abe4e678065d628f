//! Application-Layer: Controller, State, Events und Feature-Module.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod reposition;
/// Application State
///
/// Hält Erfassung, Zielobjekte, Animationen und Linien-Renderer einer Szene.
pub mod state;
pub mod stroke;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointerPhase};
pub use reposition::{RepositionScheduler, RepositionTask, SubmitOutcome, TaskPhase};
pub use state::AppState;
pub use stroke::{HitRejection, LiveCurveVisual, StrokeCapture, StrokeSession};
