//! Mapping von Host-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, PointerPhase};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Nur der zuerst aufgesetzte Pointer zeichnet; Ereignisse weiterer
/// Pointer werden bis zu dessen Freigabe ignoriert.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::Pointer {
            pointer_id,
            phase,
            screen_pos,
        } => {
            let owns_pointer = state.active_pointer == Some(pointer_id);
            match phase {
                PointerPhase::Began => match state.active_pointer {
                    Some(active) if active != pointer_id => Vec::new(),
                    _ => vec![
                        AppCommand::ClaimPointer { pointer_id },
                        AppCommand::BeginStroke { screen_pos },
                    ],
                },
                PointerPhase::Moved if owns_pointer && state.capture.is_active() => {
                    vec![AppCommand::ExtendStroke { screen_pos }]
                }
                PointerPhase::Moved => Vec::new(),
                PointerPhase::Ended if owns_pointer => vec![
                    AppCommand::EndStroke,
                    AppCommand::StartReposition,
                    AppCommand::DiscardVisual,
                    AppCommand::ReleasePointer,
                ],
                PointerPhase::Cancelled if owns_pointer => vec![
                    AppCommand::CancelStroke,
                    AppCommand::DiscardVisual,
                    AppCommand::ReleasePointer,
                ],
                PointerPhase::Ended | PointerPhase::Cancelled => Vec::new(),
            }
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
