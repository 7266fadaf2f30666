//! Fehlerarten der Analyse-Engine.
//!
//! Alle Fehler sind lokal und wiederherstellbar: bereits gesammelte Gruppen
//! und die zuletzt erzeugte Tabelle bleiben bei jedem Fehler unverändert.

use std::path::PathBuf;

use thiserror::Error;

/// Fehler einer Analyse-, Konvertierungs- oder Export-Operation.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Keine Kurven gewählt oder die Segmentierung ergab 0 Segmente.
    #[error("Auswahl leer: keine Kurven oder keine Segmente")]
    EmptySelection,

    /// Export ohne gesammelte Gruppen angefordert.
    #[error("keine Analysegruppen gesammelt, Export übersprungen")]
    NoGroupsCollected,

    /// Unbekanntes Einheiten-Kürzel.
    #[error("unbekannte Einheit: '{0}' (erlaubt: mm, cm, m, km)")]
    UnitConversionUnknown(String),

    /// Schreiben der Export-Datei fehlgeschlagen.
    #[error("Export nach {path} fehlgeschlagen: {source}")]
    SerializationIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Kurven-ID existiert nicht in der Zeichnung.
    #[error("Polylinie {0} nicht in der Zeichnung vorhanden")]
    UnknownCurve(u64),

    /// Layer existiert nicht in der Zeichnung.
    #[error("Layer '{0}' nicht in der Zeichnung vorhanden")]
    UnknownLayer(String),
}
