//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Intents und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Ein Fehler bricht die restlichen Commands ab, landet in
    /// `state.status_message` und wird zurückgegeben. Bereits gesammelte
    /// Gruppen und die letzte Tabelle bleiben erhalten.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            if let Err(err) = self.handle_command(state, command) {
                log::error!("{:#}", err);
                state.status_message = Some(format!("{:#}", err));
                return Err(err);
            }
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    pub fn handle_command(&mut self, state: &mut AppState, command: AppCommand) -> anyhow::Result<()> {
        use super::use_cases;

        match command {
            AppCommand::LoadDrawing { path } => use_cases::file_io::load_drawing(state, path)?,
            AppCommand::AnalyzeCurves {
                curve_ids,
                label_texts,
            } => use_cases::analysis::analyze_curves(state, &curve_ids, label_texts)?,
            AppCommand::BuildReport => use_cases::analysis::finish_selection(state),
            AppCommand::ConvertUnits { from, to } => {
                use_cases::analysis::convert_units(state, &from, &to)?
            }
            AppCommand::ExportReport { path } => use_cases::export::export_report(state, &path)?,
            AppCommand::AnalyzeLayers { layers } => use_cases::layers::analyze_layers(state, layers)?,
            AppCommand::ClearSession => use_cases::analysis::clear_session(state),
        }

        Ok(())
    }
}
