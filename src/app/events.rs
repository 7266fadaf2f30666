//! App-Intent und App-Command Events.

use std::path::PathBuf;

use crate::core::EntityRef;

/// Herkunft eines Beschriftungstextes.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelSource {
    /// Direkt angegebener Text
    Literal(String),
    /// Text eines Zeichnungs-Entities (Text, Führungslinie)
    Entity(EntityRef),
}

/// Intents sind Eingaben aus CLI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeichnung aus Datei laden
    DrawingLoadRequested { path: PathBuf },
    /// Kurven und Beschriftungen eines Auswahl-Durchgangs
    CurvesPicked {
        curve_ids: Vec<u64>,
        labels: Vec<LabelSource>,
    },
    /// Auswahl beendet: Tabelle aus allen Gruppen bauen
    SelectionFinished,
    /// Tabelle in andere Einheit umrechnen
    UnitConversionRequested { from: String, to: String },
    /// Aktuelle Tabelle exportieren
    ExportRequested { path: PathBuf },
    /// Layer-Analyse mit Blockzuordnung
    LayerAnalysisRequested { layers: Vec<String> },
    /// Alle Gruppen und Tabellen verwerfen
    SessionResetRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Zeichnung laden
    LoadDrawing { path: PathBuf },
    /// Eine Analysegruppe erfassen
    AnalyzeCurves {
        curve_ids: Vec<u64>,
        label_texts: Vec<String>,
    },
    /// Gruppentabelle bauen
    BuildReport,
    /// Gruppentabelle umgerechnet neu bauen
    ConvertUnits { from: String, to: String },
    /// Aktuelle Tabelle als CSV schreiben
    ExportReport { path: PathBuf },
    /// Blocktabelle für Layer bauen
    AnalyzeLayers { layers: Vec<String> },
    /// Session leeren
    ClearSession,
}
