//! Analyse-Session: sammelt Gruppen über mehrere Auswahl-Durchgänge.
//!
//! Die Session besitzt die Gruppenliste exklusiv. Ein fehlgeschlagener
//! Durchgang lässt alle bisherigen Gruppen unverändert.

use super::{AnalysisError, AnalysisGroup, Drawing, Polyline};

/// Geordnete Liste der Analysegruppen einer Session.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    groups: Vec<AnalysisGroup>,
}

impl AnalysisSession {
    /// Erstellt eine leere Session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analysiert die Polylinien `curve_ids` als eine Gruppe.
    ///
    /// Die Kurvenposition in `curve_ids` bestimmt `source_curve_index`.
    pub fn add_group(
        &mut self,
        drawing: &Drawing,
        curve_ids: &[u64],
        label_texts: Vec<String>,
        arc_tolerance: f64,
    ) -> Result<&AnalysisGroup, AnalysisError> {
        let curves = curve_ids
            .iter()
            .map(|&id| drawing.polyline(id).ok_or(AnalysisError::UnknownCurve(id)))
            .collect::<Result<Vec<&Polyline>, _>>()?;

        let group = AnalysisGroup::from_curves(&curves, label_texts, arc_tolerance)?;
        log::info!(
            "Gruppe {} erfasst: {} Polylinien, {} Segmente, Gesamtlänge {:.2}",
            self.groups.len() + 1,
            group.curve_count,
            group.segment_count(),
            group.total_length()
        );
        Ok(self.push_group(group))
    }

    /// Hängt eine fertige Gruppe an.
    pub fn push_group(&mut self, group: AnalysisGroup) -> &AnalysisGroup {
        self.groups.push(group);
        &self.groups[self.groups.len() - 1]
    }

    /// Alle Gruppen in Erfassungsreihenfolge.
    pub fn groups(&self) -> &[AnalysisGroup] {
        &self.groups
    }

    /// Anzahl der Gruppen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Gibt `true` zurück, wenn noch keine Gruppe erfasst wurde.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Verwirft alle Gruppen.
    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
