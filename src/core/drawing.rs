//! Zeichnung: Container für Polylinien, Blöcke, Texte und Führungslinien.

use std::collections::{BTreeSet, HashMap};

use super::{find_annotation_near, Annotation, EntityRef, Leader, LengthUnit, Marker, Polyline};

/// Lesbare Sicht auf eine geladene Zeichnung.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    /// Zeichnungseinheit (falls im Dokument angegeben)
    pub units: Option<LengthUnit>,
    /// Polylinien in Dokumentreihenfolge
    polylines: Vec<Polyline>,
    /// Blockreferenzen
    pub markers: Vec<Marker>,
    /// Einzel- und Mehrzeilentexte
    pub annotations: Vec<Annotation>,
    /// Führungslinien
    pub leaders: Vec<Leader>,
    polyline_lookup: HashMap<u64, usize>,
}

impl Drawing {
    /// Erstellt eine leere Zeichnung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine Polylinie hinzu. Gibt `false` zurück, wenn die ID schon existiert.
    pub fn add_polyline(&mut self, polyline: Polyline) -> bool {
        if self.polyline_lookup.contains_key(&polyline.id) {
            return false;
        }
        self.polyline_lookup.insert(polyline.id, self.polylines.len());
        self.polylines.push(polyline);
        true
    }

    /// Polylinie anhand ihrer ID.
    pub fn polyline(&self, id: u64) -> Option<&Polyline> {
        self.polyline_lookup
            .get(&id)
            .and_then(|&index| self.polylines.get(index))
    }

    /// Alle Polylinien in Dokumentreihenfolge.
    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    /// Anzahl der Polylinien.
    pub fn polyline_count(&self) -> usize {
        self.polylines.len()
    }

    /// Polylinien auf einem der angegebenen Layer, in Dokumentreihenfolge.
    pub fn polylines_on_layers<'a>(&'a self, layers: &'a [String]) -> impl Iterator<Item = &'a Polyline> + 'a {
        self.polylines
            .iter()
            .filter(move |polyline| layers.iter().any(|layer| *layer == polyline.layer))
    }

    /// Sortierte, eindeutige Layer-Namen aller Polylinien.
    pub fn layer_names(&self) -> Vec<&str> {
        self.polylines
            .iter()
            .map(|polyline| polyline.layer.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Text eines beschriftenden Entities.
    ///
    /// Texte liefern ihren Inhalt, Multi-Leader ihren eigenen Text. Eine
    /// Führungslinie mit Pfeilspitze sucht den ersten Text im Radius
    /// `leader_radius` um ihren letzten Stützpunkt.
    pub fn entity_text(&self, entity: EntityRef, leader_radius: f64) -> Option<String> {
        match entity {
            EntityRef::Text(index) => self.annotations.get(index).map(|a| a.text.clone()),
            EntityRef::Leader(index) => {
                let leader = self.leaders.get(index)?;
                if let Some(text) = &leader.text {
                    return Some(text.clone());
                }
                if !leader.has_arrowhead {
                    return None;
                }
                let end_point = leader.end_point()?;
                find_annotation_near(end_point, &self.annotations, leader_radius)
                    .map(|annotation| annotation.text.clone())
            }
        }
    }
}
