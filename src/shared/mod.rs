//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `app` und der CLI gleichermaßen
//! gelesen werden.

pub mod options;

pub use options::AnalyzerOptions;
pub use options::{CONFIG_FILE_NAME, EXPORT_WITH_BOM};
