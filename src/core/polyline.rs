//! Polylinie aus Linien- und Bogensegmenten (Bulge-Kodierung).

use glam::DVec3;

use super::{segment_curve, CircularArc, CurveSource, Segment, SegmentKind, ARC_PARAMETER_TOLERANCE};

/// Ein Vertex einer Polylinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineVertex {
    /// Position in Zeichnungseinheiten
    pub position: DVec3,
    /// Bulge des ausgehenden Segments (0 = gerade)
    pub bulge: f64,
}

impl PolylineVertex {
    /// Vertex mit geradem ausgehendem Segment.
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            bulge: 0.0,
        }
    }

    /// Vertex mit Bogen als ausgehendem Segment.
    pub fn with_bulge(position: DVec3, bulge: f64) -> Self {
        Self { position, bulge }
    }
}

/// Eine Polylinie der Zeichnung.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Entity-ID in der Zeichnung
    pub id: u64,
    /// Layer-Name
    pub layer: String,
    /// Vertices in Zeichenreihenfolge
    pub vertices: Vec<PolylineVertex>,
}

impl Polyline {
    /// Erstellt eine Polylinie.
    pub fn new(id: u64, layer: impl Into<String>, vertices: Vec<PolylineVertex>) -> Self {
        Self {
            id,
            layer: layer.into(),
            vertices,
        }
    }

    /// Erster Vertex (None bei leerer Polylinie).
    pub fn start_point(&self) -> Option<DVec3> {
        self.vertices.first().map(|v| v.position)
    }

    /// Letzter Vertex (None bei leerer Polylinie).
    pub fn end_point(&self) -> Option<DVec3> {
        self.vertices.last().map(|v| v.position)
    }

    /// Zerlegt die Polylinie mit der Standard-Bogentoleranz.
    pub fn segments(&self, source_curve_index: usize) -> Vec<Segment> {
        segment_curve(self, source_curve_index, ARC_PARAMETER_TOLERANCE)
    }
}

impl CurveSource for Polyline {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_at(&self, index: usize) -> DVec3 {
        self.vertices[index].position
    }

    fn segment_kind_at(&self, index: usize) -> SegmentKind {
        match self.vertices.get(index) {
            Some(v) if v.bulge.abs() > ARC_PARAMETER_TOLERANCE => SegmentKind::Arc,
            _ => SegmentKind::Line,
        }
    }

    fn arc_segment_at(&self, index: usize) -> Option<CircularArc> {
        let start = self.vertices.get(index)?;
        let end = self.vertices.get(index + 1)?;
        CircularArc::from_bulge(start.position, end.position, start.bulge)
    }
}
