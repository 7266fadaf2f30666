//! Zerlegung einer Kurve in Linien- und Bogensegmente mit exakter Länge.

use glam::DVec3;

use super::CircularArc;

/// Art eines Segments zwischen zwei aufeinanderfolgenden Vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentKind {
    /// Gerade Strecke
    #[default]
    Line,
    /// Kreisbogen
    Arc,
}

/// Ein gemessenes Segment einer Kurve.
///
/// Unveränderlich nach der Erstellung; `start`/`end` sind exakt die
/// Vertices i und i+1 der erzeugenden Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Startpunkt (Vertex i)
    pub start: DVec3,
    /// Endpunkt (Vertex i+1)
    pub end: DVec3,
    /// Gemessene Länge (>= 0)
    pub length: f64,
    /// Linie oder Bogen
    pub kind: SegmentKind,
    /// Position der erzeugenden Kurve in der Auswahl (0-basiert)
    pub source_curve_index: usize,
}

/// Lesezugriff auf die Geometrie einer Kurve.
///
/// Wird von der Zeichnung (Polylinien) implementiert; Tests können eigene
/// Kurven mit beliebiger Bogen-Parametrisierung bereitstellen.
pub trait CurveSource {
    /// Anzahl der Vertices.
    fn vertex_count(&self) -> usize;

    /// Position des Vertex `index`.
    fn vertex_at(&self, index: usize) -> DVec3;

    /// Segmenttyp zwischen Vertex `index` und `index + 1`.
    fn segment_kind_at(&self, index: usize) -> SegmentKind;

    /// Trägerbogen des Segments `index`, falls es ein Bogen ist.
    fn arc_segment_at(&self, index: usize) -> Option<CircularArc>;
}

/// Zerlegt eine Kurve in ihre Segmente.
///
/// Kurven mit weniger als zwei Vertices liefern keine Segmente. Ein als Bogen
/// markiertes Segment ohne gültigen Trägerbogen wird über die Sehne gemessen.
pub fn segment_curve(
    curve: &impl CurveSource,
    source_curve_index: usize,
    arc_tolerance: f64,
) -> Vec<Segment> {
    let count = curve.vertex_count();
    if count < 2 {
        return Vec::new();
    }

    (0..count - 1)
        .map(|i| {
            let start = curve.vertex_at(i);
            let end = curve.vertex_at(i + 1);
            let kind = curve.segment_kind_at(i);

            let length = match kind {
                SegmentKind::Line => start.distance(end),
                SegmentKind::Arc => match curve.arc_segment_at(i) {
                    Some(arc) => arc.length_between(start, end, arc_tolerance),
                    None => {
                        log::warn!(
                            "Segment {} ist als Bogen markiert, hat aber keinen gültigen Bogen; verwende Sehnenlänge",
                            i
                        );
                        start.distance(end)
                    }
                },
            };

            Segment {
                start,
                end,
                length,
                kind,
                source_curve_index,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ARC_PARAMETER_TOLERANCE;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Testkurve mit frei definierten Bögen pro Segment.
    struct TestCurve {
        vertices: Vec<DVec3>,
        arcs: Vec<Option<CircularArc>>,
        force_arc: bool,
    }

    impl CurveSource for TestCurve {
        fn vertex_count(&self) -> usize {
            self.vertices.len()
        }

        fn vertex_at(&self, index: usize) -> DVec3 {
            self.vertices[index]
        }

        fn segment_kind_at(&self, index: usize) -> SegmentKind {
            if self.force_arc || self.arcs.get(index).is_some_and(Option::is_some) {
                SegmentKind::Arc
            } else {
                SegmentKind::Line
            }
        }

        fn arc_segment_at(&self, index: usize) -> Option<CircularArc> {
            self.arcs.get(index).copied().flatten()
        }
    }

    fn lines(vertices: Vec<DVec3>) -> TestCurve {
        TestCurve {
            vertices,
            arcs: Vec::new(),
            force_arc: false,
        }
    }

    #[test]
    fn n_vertices_ergeben_n_minus_eins_segmente() {
        for n in 0..6usize {
            let vertices = (0..n).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect();
            let curve = lines(vertices);
            let segments = segment_curve(&curve, 0, ARC_PARAMETER_TOLERANCE);

            assert_eq!(segments.len(), n.saturating_sub(1));
            for (i, segment) in segments.iter().enumerate() {
                assert_eq!(segment.start, curve.vertices[i]);
                assert_eq!(segment.end, curve.vertices[i + 1]);
                assert!(segment.length >= 0.0);
            }
        }
    }

    #[test]
    fn gerade_hat_euklidische_laenge() {
        let curve = lines(vec![DVec3::ZERO, DVec3::new(3.0, 4.0, 0.0)]);
        let segments = segment_curve(&curve, 2, ARC_PARAMETER_TOLERANCE);

        assert_eq!(segments.len(), 1);
        assert_relative_eq!(segments[0].length, 5.0, epsilon = 1e-12);
        assert_eq!(segments[0].kind, SegmentKind::Line);
        assert_eq!(segments[0].source_curve_index, 2);
    }

    #[test]
    fn bogensegment_nutzt_bogenlaenge() {
        let arc = CircularArc::new(DVec3::ZERO, 5.0, DVec3::Z, DVec3::X, 0.0, FRAC_PI_2)
            .expect("Bogen erwartet");
        let curve = TestCurve {
            vertices: vec![arc.start_point(), arc.end_point(), DVec3::new(0.0, 10.0, 0.0)],
            arcs: vec![Some(arc), None],
            force_arc: false,
        };
        let segments = segment_curve(&curve, 0, ARC_PARAMETER_TOLERANCE);

        assert_eq!(segments[0].kind, SegmentKind::Arc);
        assert_relative_eq!(segments[0].length, 5.0 * FRAC_PI_2, epsilon = 1e-9);
        assert!(segments[0].length > segments[0].start.distance(segments[0].end));
        assert_eq!(segments[1].kind, SegmentKind::Line);
        assert_relative_eq!(segments[1].length, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn teilbogen_misst_nur_zwischen_den_vertices() {
        // Trägerbogen ist ein Halbkreis, die Vertices decken nur ein Viertel ab
        let arc = CircularArc::new(DVec3::ZERO, 2.0, DVec3::Z, DVec3::X, 0.0, PI)
            .expect("Bogen erwartet");
        let curve = TestCurve {
            vertices: vec![arc.point_at(FRAC_PI_2), arc.end_point()],
            arcs: vec![Some(arc)],
            force_arc: false,
        };
        let segments = segment_curve(&curve, 0, ARC_PARAMETER_TOLERANCE);

        assert_relative_eq!(segments[0].length, PI, epsilon = 1e-9);
    }

    #[test]
    fn bogen_ohne_traeger_faellt_auf_sehne_zurueck() {
        let curve = TestCurve {
            vertices: vec![DVec3::ZERO, DVec3::new(0.0, 2.0, 0.0)],
            arcs: vec![None],
            force_arc: true,
        };
        let segments = segment_curve(&curve, 0, ARC_PARAMETER_TOLERANCE);

        assert_eq!(segments[0].kind, SegmentKind::Arc);
        assert_relative_eq!(segments[0].length, 2.0, epsilon = 1e-12);
    }
}
