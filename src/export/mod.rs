//! Export der Berichtstabelle als Textdatei.
//!
//! Die Tabelle wird über das `csv`-Crate geschrieben (Komma-getrennt,
//! Quoting nur wenn nötig); jeder Zielpfad erhält die Endung `.csv`.

pub mod csv;

pub use self::csv::{normalize_export_path, to_delimited_text, write_csv, write_table, UTF8_BOM};
