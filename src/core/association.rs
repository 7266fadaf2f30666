//! Endpunkt-Zuordnung: Marker, zugehöriger Text und Namens-Umbenennung.

use glam::DVec3;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{find_annotation_near, Annotation, Marker, MarkerIndex};

/// Zuordnungs-Toleranz zwischen Kurvenendpunkt und Marker.
pub const ASSOCIATION_TOLERANCE: f64 = 1.0;
/// Suchradius für Texte um einen Block.
pub const LABEL_SEARCH_RADIUS: f64 = 10.0;
/// Suchradius für Texte um das Ende einer Führungslinie.
pub const LEADER_SEARCH_RADIUS: f64 = 5.0;

/// Umbenennungstabelle für Blocknamen (Original → Ersatz).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockNameMapping {
    entries: IndexMap<String, String>,
}

impl BlockNameMapping {
    /// Erstellt eine leere Tabelle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die Tabelle aus Roh-Paaren; Leerzeichen werden getrimmt,
    /// Paare mit leerer Seite verworfen. Spätere Einträge überschreiben.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut mapping = Self::new();
        for (original, replacement) in pairs {
            mapping.insert(original.as_ref(), replacement.as_ref());
        }
        mapping
    }

    /// Fügt einen Eintrag hinzu. Gibt `false` zurück, wenn er verworfen wurde.
    pub fn insert(&mut self, original: &str, replacement: &str) -> bool {
        let original = original.trim();
        let replacement = replacement.trim();
        if original.is_empty() || replacement.is_empty() {
            return false;
        }
        self.entries
            .insert(original.to_string(), replacement.to_string());
        true
    }

    /// Wendet die Tabelle an; unbekannte Namen bleiben unverändert.
    pub fn apply<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ergebnis einer Endpunkt-Zuordnung.
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
    /// Blockname nach Umbenennung
    pub name: String,
    /// Position des gefundenen Markers
    pub position: DVec3,
    /// Abstand Endpunkt → Marker
    pub distance: f64,
    /// Erster Text im Suchradius um den Marker
    pub associated_text: Option<String>,
}

/// Ordnet Punkte dem nächsten Marker und dessen Beschriftung zu.
pub struct Associator<'a> {
    markers: &'a [Marker],
    annotations: &'a [Annotation],
    index: MarkerIndex,
    tolerance: f64,
    label_radius: f64,
    mapping: &'a BlockNameMapping,
}

impl<'a> Associator<'a> {
    /// Erstellt einen Associator und baut den Marker-Index.
    pub fn new(
        markers: &'a [Marker],
        annotations: &'a [Annotation],
        tolerance: f64,
        label_radius: f64,
        mapping: &'a BlockNameMapping,
    ) -> Self {
        Self {
            markers,
            annotations,
            index: MarkerIndex::from_markers(markers),
            tolerance,
            label_radius,
            mapping,
        }
    }

    /// Ordnet einen Punkt zu. `None` = kein Marker innerhalb der Toleranz.
    pub fn associate(&self, point: DVec3) -> Option<Association> {
        let hit = self.index.nearest_within(self.markers, point, self.tolerance)?;
        let associated_text =
            find_annotation_near(hit.marker.position, self.annotations, self.label_radius)
                .map(|annotation| annotation.text.clone());

        Some(Association {
            name: self.mapping.apply(&hit.marker.name).to_string(),
            position: hit.marker.position,
            distance: hit.distance,
            associated_text,
        })
    }
}
