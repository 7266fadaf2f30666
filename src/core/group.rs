//! Analysegruppe: gemeinsam analysierte Kurven plus Beschriftungstexte.

use std::fmt::Write as _;

use super::{segment_curve, AnalysisError, CurveSource, Segment};

/// Ergebnis eines Auswahl-Durchgangs.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisGroup {
    /// Beschriftungstexte in Auswahlreihenfolge
    pub label_texts: Vec<String>,
    /// Segmente aller Kurven (Kurvenreihenfolge, dann Segmentreihenfolge)
    pub segments: Vec<Segment>,
    /// Anzahl der analysierten Kurven
    pub curve_count: usize,
}

impl AnalysisGroup {
    /// Segmentiert jede Kurve einzeln und fasst die Segmente zusammen.
    ///
    /// Jedes Segment trägt die Position seiner Kurve in `curves`. Leere
    /// Beschriftungen werden verworfen. Fehler bei leerer Auswahl oder wenn
    /// keine Kurve ein Segment liefert.
    pub fn from_curves<C: CurveSource>(
        curves: &[&C],
        label_texts: impl IntoIterator<Item = String>,
        arc_tolerance: f64,
    ) -> Result<Self, AnalysisError> {
        if curves.is_empty() {
            return Err(AnalysisError::EmptySelection);
        }

        let segments: Vec<Segment> = curves
            .iter()
            .enumerate()
            .flat_map(|(curve_index, curve)| segment_curve(*curve, curve_index, arc_tolerance))
            .collect();

        if segments.is_empty() {
            return Err(AnalysisError::EmptySelection);
        }

        Ok(Self {
            label_texts: label_texts
                .into_iter()
                .filter(|text| !text.is_empty())
                .collect(),
            segments,
            curve_count: curves.len(),
        })
    }

    /// Summe aller Segmentlängen (wird immer neu berechnet).
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(|segment| segment.length).sum()
    }

    /// Anzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Segmente einer bestimmten Kurve der Gruppe.
    pub fn segments_of_curve(&self, curve_index: usize) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(move |segment| segment.source_curve_index == curve_index)
    }

    /// Mehrzeilige Zusammenfassung zur Anzeige.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Polylinien-Segmentanalyse ===");

        if !self.label_texts.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Beschriftungen:");
            for text in &self.label_texts {
                let _ = writeln!(out, "  • {text}");
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Segmente:");
        for (i, segment) in self.segments.iter().enumerate() {
            let _ = writeln!(out, "  Segment {}: {:.2}", i + 1, segment.length);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Gesamtlänge: {:.2}", self.total_length());
        let _ = writeln!(out, "Segmentanzahl: {}", self.segment_count());
        let _ = write!(out, "Polylinien: {}", self.curve_count);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Polyline, PolylineVertex, ARC_PARAMETER_TOLERANCE};
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn straight(id: u64, points: &[(f64, f64)]) -> Polyline {
        Polyline::new(
            id,
            "0",
            points
                .iter()
                .map(|&(x, y)| PolylineVertex::new(DVec3::new(x, y, 0.0)))
                .collect(),
        )
    }

    #[test]
    fn segmente_tragen_kurvenposition() {
        let first = straight(10, &[(0.0, 0.0), (3.0, 4.0), (6.0, 4.0)]);
        let second = straight(20, &[(0.0, 0.0), (0.0, 2.0)]);
        let group = AnalysisGroup::from_curves(
            &[&first, &second],
            vec!["A".to_string()],
            ARC_PARAMETER_TOLERANCE,
        )
        .expect("Gruppe erwartet");

        let sources: Vec<usize> = group.segments.iter().map(|s| s.source_curve_index).collect();
        assert_eq!(sources, vec![0, 0, 1]);
        assert_eq!(group.curve_count, 2);
        assert_eq!(group.segments_of_curve(0).count(), 2);
        assert_relative_eq!(group.total_length(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn gesamtlaenge_ist_summe_der_segmente() {
        let curve = straight(1, &[(0.0, 0.0), (1.0, 0.0), (1.0, 2.5), (4.0, 2.5)]);
        let mut group = AnalysisGroup::from_curves(&[&curve], Vec::<String>::new(), ARC_PARAMETER_TOLERANCE)
            .expect("Gruppe erwartet");
        let sum: f64 = group.segments.iter().map(|s| s.length).sum();
        assert_eq!(group.total_length(), sum);

        group.segments.pop();
        assert_relative_eq!(group.total_length(), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn leere_auswahl_ist_fehler() {
        let none: [&Polyline; 0] = [];
        let err = AnalysisGroup::from_curves(&none, Vec::<String>::new(), ARC_PARAMETER_TOLERANCE).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptySelection));

        let single_vertex = straight(1, &[(0.0, 0.0)]);
        let err = AnalysisGroup::from_curves(&[&single_vertex], Vec::<String>::new(), ARC_PARAMETER_TOLERANCE)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::EmptySelection));
    }

    #[test]
    fn leere_beschriftungen_werden_verworfen() {
        let curve = straight(1, &[(0.0, 0.0), (1.0, 0.0)]);
        let group = AnalysisGroup::from_curves(
            &[&curve],
            vec![String::new(), "B".to_string(), "C".to_string()],
            ARC_PARAMETER_TOLERANCE,
        )
        .expect("Gruppe erwartet");

        assert_eq!(group.label_texts, vec!["B", "C"]);
    }

    #[test]
    fn zusammenfassung_enthaelt_segmente_und_summen() {
        let curve = straight(1, &[(0.0, 0.0), (3.0, 4.0), (3.0, 7.0)]);
        let group = AnalysisGroup::from_curves(&[&curve], vec!["Zulauf".to_string()], ARC_PARAMETER_TOLERANCE)
            .expect("Gruppe erwartet");
        let summary = group.summary();

        assert!(summary.contains("• Zulauf"));
        assert!(summary.contains("Segment 1: 5.00"));
        assert!(summary.contains("Segment 2: 3.00"));
        assert!(summary.contains("Gesamtlänge: 8.00"));
        assert!(summary.contains("Segmentanzahl: 2"));
        assert!(summary.contains("Polylinien: 1"));
    }
}
