//! Use-Cases der gruppenbasierten Analyse: erfassen, abschließen, umrechnen.

use crate::app::AppState;
use crate::core::{convert_block_report, report, AnalysisError, LengthUnit};

/// Erfasst einen Auswahl-Durchgang als neue Gruppe.
pub fn analyze_curves(state: &mut AppState, curve_ids: &[u64], label_texts: Vec<String>) -> anyhow::Result<()> {
    let drawing = state
        .drawing
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Keine Zeichnung geladen"))?;

    let group = state
        .session
        .add_group(drawing, curve_ids, label_texts, state.options.arc_tolerance)?;
    let summary = group.summary();
    log::debug!("{}", summary);

    // Neue Gruppe macht jede bisherige Tabelle ungültig
    state.report = None;
    state.display_unit = None;
    state.curve_reports.clear();
    state.status_message = Some(summary);
    Ok(())
}

/// Beendet die Auswahl und baut die Tabelle in Zeichnungseinheiten.
pub fn finish_selection(state: &mut AppState) {
    let table = report::build(state.session.groups());
    log::info!(
        "Tabelle gebaut: {} Gruppen, {} Zeilen, {} Spalten",
        state.session.len(),
        table.row_count(),
        table.columns().len()
    );
    state.status_message = Some(format!("{} Gruppen ausgewertet", state.session.len()));
    state.report = Some(table);
    state.curve_reports.clear();
    state.display_unit = state.drawing.as_ref().and_then(|drawing| drawing.units);
}

/// Baut die Tabelle aus den Rohlängen neu, interpretiert in `from` und
/// ausgegeben in `to`. Bei unbekannter Einheit bleibt die Tabelle unverändert.
///
/// Ist der Blockbericht der Layer-Analyse aktiv, wird dieser umgerechnet.
pub fn convert_units(state: &mut AppState, from: &str, to: &str) -> Result<(), AnalysisError> {
    let from: LengthUnit = from.parse()?;
    let to: LengthUnit = to.parse()?;

    let table = if state.curve_reports.is_empty() {
        report::convert(state.session.groups(), from, to)
    } else {
        convert_block_report(&state.curve_reports, from, to)
    };
    log::info!("Tabelle umgerechnet: {} -> {}", from, to);

    state.status_message = Some(format!("Längen in {} umgerechnet", to));
    state.report = Some(table);
    state.display_unit = Some(to);
    Ok(())
}

/// Verwirft alle Gruppen und Tabellen; die Zeichnung bleibt geladen.
pub fn clear_session(state: &mut AppState) {
    state.session.clear();
    state.report = None;
    state.curve_reports.clear();
    state.status_message = None;
}
