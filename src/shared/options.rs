//! Zentrale Konfiguration der Polylinien-Analyse.
//!
//! `AnalyzerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte der Core-Module bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{
    BlockNameMapping, LayerAnalysisSettings, LengthUnit, ARC_PARAMETER_TOLERANCE,
    ASSOCIATION_TOLERANCE, LABEL_SEARCH_RADIUS, LEADER_SEARCH_RADIUS,
};

// ── Export ──────────────────────────────────────────────────────────

/// Standard: CSV mit UTF-8 BOM schreiben.
pub const EXPORT_WITH_BOM: bool = true;
/// Dateiname der Optionen neben der Binary.
pub const CONFIG_FILE_NAME: &str = "polyline_stats.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Analyse-Optionen.
/// Wird als `polyline_stats.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzerOptions {
    // ── Zuordnung ───────────────────────────────────────────────
    /// Maximaler Abstand Endpunkt → Block (strikt kleiner)
    #[serde(default = "default_association_tolerance")]
    pub association_tolerance: f64,
    /// Suchradius für Texte um einen Block
    #[serde(default = "default_label_search_radius")]
    pub label_search_radius: f64,
    /// Suchradius für Texte um das Ende einer Führungslinie
    #[serde(default = "default_leader_search_radius")]
    pub leader_search_radius: f64,

    // ── Geometrie ───────────────────────────────────────────────
    /// Parameter-Toleranz für Bogenabfragen
    #[serde(default = "default_arc_tolerance")]
    pub arc_tolerance: f64,

    // ── Einheiten ───────────────────────────────────────────────
    /// Zeichnungseinheit, falls das Dokument keine angibt
    #[serde(default = "default_source_unit")]
    pub default_source_unit: LengthUnit,
    /// Zieleinheit der Tabelle, falls beim Aufruf keine angegeben ist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_target_unit: Option<LengthUnit>,

    // ── Export ──────────────────────────────────────────────────
    /// UTF-8 BOM vor die CSV-Datei schreiben
    #[serde(default = "default_export_with_bom")]
    pub export_with_bom: bool,
    /// Umbenennung von Blocknamen im Blockbericht
    #[serde(default)]
    pub block_name_mapping: BlockNameMapping,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            association_tolerance: ASSOCIATION_TOLERANCE,
            label_search_radius: LABEL_SEARCH_RADIUS,
            leader_search_radius: LEADER_SEARCH_RADIUS,
            arc_tolerance: ARC_PARAMETER_TOLERANCE,
            default_source_unit: LengthUnit::Mm,
            default_target_unit: None,
            export_with_bom: EXPORT_WITH_BOM,
            block_name_mapping: BlockNameMapping::new(),
        }
    }
}

fn default_association_tolerance() -> f64 {
    ASSOCIATION_TOLERANCE
}

fn default_label_search_radius() -> f64 {
    LABEL_SEARCH_RADIUS
}

fn default_leader_search_radius() -> f64 {
    LEADER_SEARCH_RADIUS
}

fn default_arc_tolerance() -> f64 {
    ARC_PARAMETER_TOLERANCE
}

fn default_source_unit() -> LengthUnit {
    LengthUnit::Mm
}

fn default_export_with_bom() -> bool {
    EXPORT_WITH_BOM
}

impl AnalyzerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("polyline-stats"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Toleranzen für die Layer-Analyse.
    pub fn layer_settings(&self) -> LayerAnalysisSettings {
        LayerAnalysisSettings {
            association_tolerance: self.association_tolerance,
            label_radius: self.label_search_radius,
            arc_tolerance: self.arc_tolerance,
        }
    }
}
