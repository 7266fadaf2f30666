//! Use-Case für den CSV-Export der aktuellen Tabelle.

use std::path::Path;

use crate::app::AppState;
use crate::core::AnalysisError;
use crate::export::write_csv;

/// Schreibt die aktuelle Tabelle als CSV.
///
/// Ohne gesammelte Gruppen und ohne Blockbericht wird der Export mit
/// `NoGroupsCollected` übersprungen. Die Tabelle bleibt bei jedem Fehler
/// für einen erneuten Versuch erhalten. Fehlt die Tabelle noch, wird sie
/// aus den Gruppen gebaut.
pub fn export_report(state: &mut AppState, path: &Path) -> Result<(), AnalysisError> {
    if state.report.is_none() && !state.session.is_empty() {
        super::analysis::finish_selection(state);
    }

    let table = match &state.report {
        Some(table) if !state.session.is_empty() || !state.curve_reports.is_empty() => table,
        _ => return Err(AnalysisError::NoGroupsCollected),
    };

    let written = write_csv(table, path, state.options.export_with_bom)?;
    state.status_message = Some(format!("Export gespeichert: {}", written.display()));
    state.last_export_path = Some(written);
    Ok(())
}
