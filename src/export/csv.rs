//! CSV-Writer für `ReportTable`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::core::{AnalysisError, ReportTable};

/// UTF-8 Byte-Order-Mark, damit Tabellenkalkulationen die Kodierung erkennen.
pub const UTF8_BOM: &str = "\u{feff}";

/// Schreibt Kopfzeile und alle Zeilen; Felder mit Komma, Anführungszeichen
/// oder Zeilenumbruch werden gequotet, jede Zeile endet mit `\n`.
pub fn write_table<W: Write>(table: &ReportTable, writer: W) -> csv::Result<W> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }
    writer.flush()?;

    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

/// Rendert die Tabelle als CSV-Text.
pub fn to_delimited_text(table: &ReportTable) -> csv::Result<String> {
    let bytes = write_table(table, Vec::new())?;
    String::from_utf8(bytes)
        .map_err(|err| csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

/// Ersetzt jede Dateiendung durch `.csv`.
pub fn normalize_export_path(path: &Path) -> PathBuf {
    path.with_extension("csv")
}

/// Schreibt die Tabelle nach `path` (Endung wird zu `.csv`).
///
/// Gibt den tatsächlich geschriebenen Pfad zurück. IO-Fehler werden als
/// `SerializationIo` gemeldet; die Tabelle selbst bleibt unberührt.
pub fn write_csv(table: &ReportTable, path: &Path, with_bom: bool) -> Result<PathBuf, AnalysisError> {
    let target = normalize_export_path(path);
    let io_error = |source: std::io::Error| AnalysisError::SerializationIo {
        path: target.clone(),
        source,
    };

    let mut file = BufWriter::new(File::create(&target).map_err(io_error)?);
    if with_bom {
        file.write_all(UTF8_BOM.as_bytes()).map_err(io_error)?;
    }
    let mut file = write_table(table, file).map_err(|err| io_error(err.into()))?;
    file.flush().map_err(io_error)?;

    log::info!(
        "Bericht exportiert: {} Zeilen nach {}",
        table.row_count(),
        target.display()
    );
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReportCell;

    fn read_back(text: &str) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(text.as_bytes())
            .records()
            .map(|record| {
                record
                    .expect("gültiger CSV-Datensatz")
                    .iter()
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn quotet_nur_wenn_noetig() {
        let mut table = ReportTable::with_columns(vec!["Label".into(), "Segment_1".into()]);
        table.push_row(vec![ReportCell::Text("DN100".into()), ReportCell::length(1.0, None)]);
        table.push_row(vec![ReportCell::Text("a,b".into()), ReportCell::length(2.0, None)]);
        table.push_row(vec![ReportCell::Text("zwei\nZeilen".into()), ReportCell::length(3.0, None)]);

        let text = to_delimited_text(&table).expect("CSV");

        assert_eq!(text, "Label,Segment_1\nDN100,1\n\"a,b\",2\n\"zwei\nZeilen\",3\n");
    }

    #[test]
    fn escapte_felder_lassen_sich_zuruecklesen() {
        let mut table = ReportTable::with_columns(vec!["Label".into(), "Segment_1".into()]);
        table.push_row(vec![
            ReportCell::Text("He said, \"go\"".into()),
            ReportCell::length(2.5, Some(0)),
        ]);
        let text = to_delimited_text(&table).expect("CSV");

        assert!(text.contains("\"He said, \"\"go\"\"\",2.5\n"));
        assert_eq!(
            read_back(&text),
            vec![
                vec!["Label".to_string(), "Segment_1".to_string()],
                vec!["He said, \"go\"".to_string(), "2.5".to_string()],
            ]
        );
    }

    #[test]
    fn leere_zellen_bleiben_leer() {
        let mut table = ReportTable::with_columns(vec!["Label".into(), "Segment_1".into(), "Segment_2".into()]);
        table.push_row(vec![ReportCell::Text("B".into())]);

        assert_eq!(to_delimited_text(&table).expect("CSV"), "Label,Segment_1,Segment_2\nB,,\n");
    }

    #[test]
    fn datei_beginnt_mit_bom() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut table = ReportTable::with_columns(vec!["Label".into()]);
        table.push_row(vec![ReportCell::Text("A".into())]);

        let written = write_csv(&table, &dir.path().join("bericht.txt"), true).expect("Export");

        assert_eq!(written, dir.path().join("bericht.csv"));
        let content = std::fs::read_to_string(&written).expect("Datei lesbar");
        assert_eq!(content, "\u{feff}Label\nA\n");
    }

    #[test]
    fn endung_wird_zu_csv() {
        assert_eq!(normalize_export_path(Path::new("out/bericht.xlsx")), PathBuf::from("out/bericht.csv"));
        assert_eq!(normalize_export_path(Path::new("bericht")), PathBuf::from("bericht.csv"));
    }
}
