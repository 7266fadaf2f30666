//! Berichtstabelle: eine Zeile pro Gruppe, eine Spalte pro Segmentposition.
//!
//! Aufbau in zwei Durchgängen: zuerst das Schema (maximale Segmentanzahl),
//! danach das Befüllen der Zeilen. Leere Zellen werden erst beim Rendern zu
//! leeren Strings.

use std::fmt;

use super::{AnalysisGroup, LengthUnit};

/// Kopf der Beschriftungsspalte.
pub const LABEL_COLUMN: &str = "Label";
/// Ersatz-Beschriftung für Gruppen ohne Text.
pub const UNLABELED_GROUP: &str = "unlabeled analysis";

/// Rundet auf zwei Nachkommastellen (kaufmännisch, weg von Null).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Eine Tabellenzelle.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportCell {
    /// Freitext (Beschriftung, Blockname)
    Text(String),
    /// Gerundete Länge mit Herkunftskurve (für Einfärbung)
    Length {
        /// Auf zwei Nachkommastellen gerundeter Wert
        value: f64,
        /// Position der erzeugenden Kurve in der Gruppe
        source_curve: Option<usize>,
    },
    /// Keine Daten
    Empty,
}

impl ReportCell {
    /// Längenzelle; der Wert wird hier gerundet.
    pub fn length(value: f64, source_curve: Option<usize>) -> Self {
        ReportCell::Length {
            value: round2(value),
            source_curve,
        }
    }

    /// Textzelle oder leer bei `None`.
    pub fn text_or_empty(text: Option<&str>) -> Self {
        match text {
            Some(text) => ReportCell::Text(text.to_string()),
            None => ReportCell::Empty,
        }
    }
}

impl fmt::Display for ReportCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportCell::Text(text) => f.write_str(text),
            ReportCell::Length { value, .. } => write!(f, "{}", value),
            ReportCell::Empty => Ok(()),
        }
    }
}

/// Tabelle mit festem Schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    columns: Vec<String>,
    rows: Vec<Vec<ReportCell>>,
}

impl ReportTable {
    /// Erstellt eine Tabelle mit festen Spalten und ohne Zeilen.
    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Hängt eine Zeile an; sie wird auf die Spaltenanzahl gekürzt bzw. mit
    /// leeren Zellen aufgefüllt.
    pub fn push_row(&mut self, mut cells: Vec<ReportCell>) {
        cells.resize(self.columns.len(), ReportCell::Empty);
        self.rows.push(cells);
    }

    /// Spaltenköpfe.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Zeilen mit typisierten Zellen.
    pub fn rows(&self) -> &[Vec<ReportCell>] {
        &self.rows
    }

    /// Anzahl der Zeilen.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Zeile `index` als Strings gerendert.
    pub fn row_strings(&self, index: usize) -> Option<Vec<String>> {
        self.rows
            .get(index)
            .map(|row| row.iter().map(ToString::to_string).collect())
    }
}

/// Größte Segmentanzahl über alle Gruppen (0 ohne Gruppen).
pub fn max_segments(groups: &[AnalysisGroup]) -> usize {
    groups
        .iter()
        .map(AnalysisGroup::segment_count)
        .max()
        .unwrap_or(0)
}

/// Baut die Tabelle in Zeichnungseinheiten ohne Einheit im Spaltenkopf.
pub fn build(groups: &[AnalysisGroup]) -> ReportTable {
    build_scaled(groups, 1.0, None)
}

/// Baut die Tabelle aus den Originalgruppen neu, umgerechnet von `from`
/// nach `to`. Gerundet wird erst nach der Umrechnung.
pub fn convert(groups: &[AnalysisGroup], from: LengthUnit, to: LengthUnit) -> ReportTable {
    build_scaled(groups, LengthUnit::factor(from, to), Some(to))
}

fn build_scaled(groups: &[AnalysisGroup], factor: f64, unit: Option<LengthUnit>) -> ReportTable {
    let max_segments = max_segments(groups);

    let mut columns = Vec::with_capacity(max_segments + 1);
    columns.push(LABEL_COLUMN.to_string());
    columns.extend((1..=max_segments).map(|i| match unit {
        Some(unit) => format!("Segment_{i}({unit})"),
        None => format!("Segment_{i}"),
    }));

    let mut table = ReportTable::with_columns(columns);

    for group in groups {
        let label = group
            .label_texts
            .first()
            .map(String::as_str)
            .unwrap_or(UNLABELED_GROUP);

        let mut cells = Vec::with_capacity(max_segments + 1);
        cells.push(ReportCell::Text(label.to_string()));
        cells.extend(
            group
                .segments
                .iter()
                .map(|segment| ReportCell::length(segment.length * factor, Some(segment.source_curve_index))),
        );
        table.push_row(cells);

        for extra in group.label_texts.iter().skip(1) {
            table.push_row(vec![ReportCell::Text(extra.clone())]);
        }
    }

    table
}
