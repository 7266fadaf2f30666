//! Polyline Stats Library.
//! Segmentlängen-Analyse für Polylinien als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;
pub mod xml;

pub use app::{AppCommand, AppController, AppIntent, AppState, LabelSource};
pub use core::{
    AnalysisError, AnalysisGroup, AnalysisSession, Annotation, CircularArc, Drawing, EntityRef,
    Leader, LengthUnit, Marker, Polyline, PolylineVertex, ReportCell, ReportTable, Segment,
    SegmentKind,
};
pub use core::{analyze_layers, build_block_report, nearest_marker, Associator, MarkerIndex};
pub use export::{to_delimited_text, write_csv, write_table};
pub use shared::AnalyzerOptions;
pub use xml::{parse_drawing, write_drawing};
