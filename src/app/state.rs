//! Hauptzustand einer Analyse-Sitzung.

use std::path::PathBuf;

use crate::core::{AnalysisSession, CurveReport, Drawing, LengthUnit, ReportTable};
use crate::shared::AnalyzerOptions;

/// Hauptzustand der Anwendung
#[derive(Debug, Default)]
pub struct AppState {
    /// Aktuell geladene Zeichnung (None = keine Datei geladen)
    pub drawing: Option<Drawing>,
    /// Pfad der geladenen Zeichnung
    pub drawing_path: Option<PathBuf>,
    /// Gesammelte Analysegruppen
    pub session: AnalysisSession,
    /// Zuletzt gebaute Tabelle (Gruppen- oder Blockbericht)
    pub report: Option<ReportTable>,
    /// Einheit der aktuellen Tabelle (None = Zeichnungseinheit ohne Angabe)
    pub display_unit: Option<LengthUnit>,
    /// Ergebnisse der letzten Layer-Analyse
    pub curve_reports: Vec<CurveReport>,
    /// Laufzeit-Optionen (Toleranzen, Export, Umbenennung)
    pub options: AnalyzerOptions,
    /// Letzte Statusmeldung (Erfolg oder Fehler)
    pub status_message: Option<String>,
    /// Zuletzt geschriebene Exportdatei
    pub last_export_path: Option<PathBuf>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen App-State mit vorgegebenen Optionen.
    pub fn with_options(options: AnalyzerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Einheit der Rohlängen: Zeichnungseinheit, sonst Options-Default.
    pub fn source_unit(&self) -> LengthUnit {
        self.drawing
            .as_ref()
            .and_then(|drawing| drawing.units)
            .unwrap_or(self.options.default_source_unit)
    }

    /// Anzahl der gesammelten Gruppen (für Statusanzeige)
    pub fn group_count(&self) -> usize {
        self.session.len()
    }
}
