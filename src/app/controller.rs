//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::core::SurfaceHitTest;

/// Orchestriert Host-Events und Handler auf den AppState.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// `scene` liefert die Treffertests für Strich-Start und -Verlängerung.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        scene: &dyn SurfaceHitTest,
        intent: AppIntent,
    ) {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, scene, command);
        }
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        scene: &dyn SurfaceHitTest,
        command: AppCommand,
    ) {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pointer ===
            AppCommand::ClaimPointer { pointer_id } => handlers::pointer::claim(state, pointer_id),
            AppCommand::ReleasePointer => handlers::pointer::release(state),

            // === Strich ===
            AppCommand::BeginStroke { screen_pos } => {
                handlers::stroke::begin(state, scene, screen_pos)
            }
            AppCommand::ExtendStroke { screen_pos } => {
                handlers::stroke::extend(state, scene, screen_pos)
            }
            AppCommand::EndStroke => handlers::stroke::end(state),
            AppCommand::CancelStroke => handlers::stroke::cancel(state),
            AppCommand::DiscardVisual => handlers::stroke::discard_visual(state),

            // === Ausrichtung ===
            AppCommand::StartReposition => handlers::reposition::start(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options),
        }
    }

    /// Schreitet alle laufenden Ausrichtungen um `dt` Sekunden fort.
    pub fn tick(&mut self, state: &mut AppState, dt: f32) {
        super::handlers::reposition::tick(state, dt);
    }
}
