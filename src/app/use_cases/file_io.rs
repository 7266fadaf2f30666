//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Lesezugriffe sind hier zentralisiert.

use std::path::PathBuf;

use anyhow::Context;

use crate::app::AppState;

/// Lädt eine Zeichnung in den AppState.
///
/// Eine neue Zeichnung verwirft die bisherige Session, weil Kurven-IDs nur
/// innerhalb einer Zeichnung gültig sind.
pub fn load_drawing(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let xml_content = std::fs::read_to_string(&path)
        .with_context(|| format!("Zeichnung nicht lesbar: {}", path.display()))?;
    let drawing = crate::xml::parse_drawing(&xml_content)
        .with_context(|| format!("Zeichnung fehlerhaft: {}", path.display()))?;

    log::info!(
        "Zeichnung {} geladen: {} Polylinien auf {} Layern",
        path.display(),
        drawing.polyline_count(),
        drawing.layer_names().len()
    );

    state.session.clear();
    state.report = None;
    state.curve_reports.clear();
    state.display_unit = drawing.units;
    state.status_message = None;
    state.drawing = Some(drawing);
    state.drawing_path = Some(path);
    Ok(())
}
