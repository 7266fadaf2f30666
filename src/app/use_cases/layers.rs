//! Use-Case für die Layer-Analyse mit Blockzuordnung.

use crate::app::AppState;
use crate::core::{analyze_layers as analyze, build_block_report};

/// Analysiert alle Polylinien der Layer und setzt den Blockbericht als Tabelle.
pub fn analyze_layers(state: &mut AppState, layers: Vec<String>) -> anyhow::Result<()> {
    let drawing = state
        .drawing
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Keine Zeichnung geladen"))?;

    let reports = analyze(
        drawing,
        &layers,
        &state.options.layer_settings(),
        &state.options.block_name_mapping,
    )?;
    let table = build_block_report(&reports);

    state.status_message = Some(format!(
        "{} Polylinien auf Layer(n) {} ausgewertet",
        reports.len(),
        layers.join(", ")
    ));
    state.display_unit = drawing.units;
    state.report = Some(table);
    state.curve_reports = reports;
    Ok(())
}
