//! Layer-Analyse: jede Polylinie eines Layers mit Start-/Endblock und Beschriftung.
//!
//! Anders als die gruppenbasierte Auswertung erzeugt die Layer-Analyse eine
//! Zeile pro Polylinie. Start- und Endpunkt werden dem nächsten Block
//! innerhalb der Toleranz zugeordnet; der Text beim Startblock hat Vorrang
//! vor dem Text beim Endblock.

use super::{
    segment_curve, AnalysisError, Associator, Association, BlockNameMapping, Drawing, LengthUnit,
    ReportCell, ReportTable, Segment, ARC_PARAMETER_TOLERANCE, ASSOCIATION_TOLERANCE,
    LABEL_SEARCH_RADIUS,
};

/// Kopf der Startblock-Spalte.
pub const START_BLOCK_COLUMN: &str = "Start block";
/// Kopf der Endblock-Spalte.
pub const END_BLOCK_COLUMN: &str = "End block";
/// Kopf der Beschriftungsspalte.
pub const LEADER_TEXT_COLUMN: &str = "Leader text";
/// Kopf der Summenspalte.
pub const TOTAL_LENGTH_COLUMN: &str = "Total length";

/// Toleranzen der Layer-Analyse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerAnalysisSettings {
    /// Maximaler Abstand Endpunkt → Block (strikt kleiner)
    pub association_tolerance: f64,
    /// Suchradius für Texte um einen Block
    pub label_radius: f64,
    /// Parameter-Toleranz für Bögen
    pub arc_tolerance: f64,
}

impl Default for LayerAnalysisSettings {
    fn default() -> Self {
        Self {
            association_tolerance: ASSOCIATION_TOLERANCE,
            label_radius: LABEL_SEARCH_RADIUS,
            arc_tolerance: ARC_PARAMETER_TOLERANCE,
        }
    }
}

/// Auswertung einer einzelnen Polylinie.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveReport {
    /// ID der Polylinie
    pub polyline_id: u64,
    /// Layer der Polylinie
    pub layer: String,
    /// Block am Startpunkt
    pub start: Option<Association>,
    /// Block am Endpunkt
    pub end: Option<Association>,
    /// Segmente in Vertex-Reihenfolge
    pub segments: Vec<Segment>,
}

impl CurveReport {
    /// Summe der Segmentlängen.
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(|segment| segment.length).sum()
    }

    /// Text am Startblock, sonst Text am Endblock.
    pub fn leader_text(&self) -> Option<&str> {
        fn text_of(association: &Option<Association>) -> Option<&str> {
            association
                .as_ref()
                .and_then(|a| a.associated_text.as_deref())
                .filter(|text| !text.is_empty())
        }
        text_of(&self.start).or_else(|| text_of(&self.end))
    }

    /// Blockname am Startpunkt.
    pub fn start_block(&self) -> Option<&str> {
        self.start.as_ref().map(|a| a.name.as_str())
    }

    /// Blockname am Endpunkt.
    pub fn end_block(&self) -> Option<&str> {
        self.end.as_ref().map(|a| a.name.as_str())
    }
}

/// Analysiert alle Polylinien der angegebenen Layer in Dokumentreihenfolge.
///
/// Jeder Layer-Name muss in der Zeichnung vorkommen, sonst `UnknownLayer`.
pub fn analyze_layers(
    drawing: &Drawing,
    layers: &[String],
    settings: &LayerAnalysisSettings,
    mapping: &BlockNameMapping,
) -> Result<Vec<CurveReport>, AnalysisError> {
    let known = drawing.layer_names();
    if let Some(missing) = layers.iter().find(|layer| !known.contains(&layer.as_str())) {
        return Err(AnalysisError::UnknownLayer(missing.clone()));
    }

    let associator = Associator::new(
        &drawing.markers,
        &drawing.annotations,
        settings.association_tolerance,
        settings.label_radius,
        mapping,
    );

    let reports: Vec<CurveReport> = drawing
        .polylines_on_layers(layers)
        .map(|polyline| CurveReport {
            polyline_id: polyline.id,
            layer: polyline.layer.clone(),
            start: polyline
                .start_point()
                .and_then(|point| associator.associate(point)),
            end: polyline
                .end_point()
                .and_then(|point| associator.associate(point)),
            segments: segment_curve(polyline, 0, settings.arc_tolerance),
        })
        .collect();

    let unmatched = reports
        .iter()
        .filter(|r| r.start.is_none() || r.end.is_none())
        .count();
    log::info!(
        "Layer-Analyse: {} Polylinien auf {} Layer(n), {} ohne vollständige Blockzuordnung",
        reports.len(),
        layers.len(),
        unmatched
    );

    Ok(reports)
}

/// Baut die Blocktabelle: Start-/Endblock, Beschriftung, Segmente, Summe.
pub fn build_block_report(reports: &[CurveReport]) -> ReportTable {
    build_block_scaled(reports, 1.0, None)
}

/// Baut die Blocktabelle aus den Rohlängen neu, umgerechnet von `from` nach `to`.
pub fn convert_block_report(reports: &[CurveReport], from: LengthUnit, to: LengthUnit) -> ReportTable {
    build_block_scaled(reports, LengthUnit::factor(from, to), Some(to))
}

fn build_block_scaled(reports: &[CurveReport], factor: f64, unit: Option<LengthUnit>) -> ReportTable {
    let with_unit = |name: String| match unit {
        Some(unit) => format!("{name}({unit})"),
        None => name,
    };
    let max_segments = reports.iter().map(|r| r.segments.len()).max().unwrap_or(0);

    let mut columns = vec![
        START_BLOCK_COLUMN.to_string(),
        END_BLOCK_COLUMN.to_string(),
        LEADER_TEXT_COLUMN.to_string(),
    ];
    columns.extend((1..=max_segments).map(|i| with_unit(format!("Segment_{i}"))));
    columns.push(with_unit(TOTAL_LENGTH_COLUMN.to_string()));

    let mut table = ReportTable::with_columns(columns);
    for report in reports {
        let mut cells = Vec::with_capacity(max_segments + 4);
        cells.push(ReportCell::text_or_empty(report.start_block()));
        cells.push(ReportCell::text_or_empty(report.end_block()));
        cells.push(ReportCell::text_or_empty(report.leader_text()));
        cells.extend(
            report
                .segments
                .iter()
                .map(|segment| ReportCell::length(segment.length * factor, None)),
        );
        // Summe steht immer in der letzten Spalte
        cells.resize(max_segments + 3, ReportCell::Empty);
        cells.push(ReportCell::length(report.total_length() * factor, None));
        table.push_row(cells);
    }
    table
}
