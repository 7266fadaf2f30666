//! Core-Domänentypen: Polylinien, Segmente, Marker, Spatial-Suche, Gruppen, Bericht.

pub mod arc;
pub mod association;
pub mod drawing;
pub mod error;
pub mod group;
pub mod layer_report;
pub mod marker;
/// Polylinien mit Bulge-Stützpunkten
///
/// Eine Polylinie ist eine Folge von Stützpunkten; ein Bulge ungleich 0
/// macht das folgende Segment zum Kreisbogen.
pub mod polyline;
pub mod report;
pub mod segment;
pub mod session;
pub mod spatial;
pub mod units;

pub use arc::{CircularArc, ARC_PARAMETER_TOLERANCE};
pub use association::{
    Association, Associator, BlockNameMapping, ASSOCIATION_TOLERANCE, LABEL_SEARCH_RADIUS,
    LEADER_SEARCH_RADIUS,
};
pub use drawing::Drawing;
pub use error::AnalysisError;
pub use group::AnalysisGroup;
pub use layer_report::{
    analyze_layers, build_block_report, convert_block_report, CurveReport, LayerAnalysisSettings,
};
pub use marker::{Annotation, EntityRef, Leader, Marker};
pub use polyline::{Polyline, PolylineVertex};
pub use report::{ReportCell, ReportTable, LABEL_COLUMN, UNLABELED_GROUP};
pub use segment::{segment_curve, CurveSource, Segment, SegmentKind};
pub use session::AnalysisSession;
pub use spatial::{find_annotation_near, nearest_marker, MarkerIndex, NearestMarker};
pub use units::LengthUnit;
