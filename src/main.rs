//! Polyline Stats (CLI).
//!
//! Misst Segmentlängen von Polylinien einer Zeichnung, gruppiert nach
//! Beschriftungen oder Layern, und exportiert das Ergebnis als CSV.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polyline_stats::{
    write_table, AnalyzerOptions, AppController, AppIntent, AppState, EntityRef, LabelSource,
};

#[derive(Parser, Debug)]
#[command(name = "polyline-stats")]
#[command(author, version, about = "Segment length statistics for drawing polylines", long_about = None)]
struct Args {
    /// Options file (default: polyline_stats.toml next to the binary)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze picked polyline groups, one table row per group
    Pick {
        /// Drawing file (XML)
        drawing: PathBuf,

        /// Group as `ids=labels`, e.g. `1,2=Label A|#text:0|#leader:1`
        #[arg(short = 'g', long = "group", required = true)]
        groups: Vec<String>,

        /// Unit of the drawing lengths (defaults to the drawing's unit)
        #[arg(long)]
        from: Option<String>,

        /// Convert lengths into this unit (default: `default_target_unit` from the options)
        #[arg(long)]
        to: Option<String>,

        /// Write CSV to this path (extension becomes .csv); stdout otherwise
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Analyze every polyline on the given layers with start/end blocks
    Layers {
        /// Drawing file (XML)
        drawing: PathBuf,

        /// Layer to analyze (repeatable); lists available layers if omitted
        #[arg(short = 'l', long = "layer")]
        layers: Vec<String>,

        /// Block name mapping `OLD=NEW` (repeatable)
        #[arg(short = 'm', long = "map")]
        mappings: Vec<String>,

        /// Write CSV to this path (extension becomes .csv); stdout otherwise
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Polyline Stats v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(AnalyzerOptions::config_path);
    let options = AnalyzerOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    match args.command {
        Command::Pick {
            drawing,
            groups,
            from,
            to,
            output,
        } => {
            controller.handle_intent(&mut state, AppIntent::DrawingLoadRequested { path: drawing })?;

            for spec in &groups {
                let (curve_ids, labels) = match parse_group_spec(spec) {
                    Ok(parsed) => parsed,
                    Err(err) => {
                        log::error!("Gruppe '{}' uebersprungen: {:#}", spec, err);
                        continue;
                    }
                };
                // Fehler einer Gruppe beenden die Auswahl nicht
                if controller
                    .handle_intent(&mut state, AppIntent::CurvesPicked { curve_ids, labels })
                    .is_ok()
                {
                    if let Some(summary) = &state.status_message {
                        eprintln!("{summary}\n");
                    }
                }
            }

            controller.handle_intent(&mut state, AppIntent::SelectionFinished)?;

            apply_target_unit(&mut controller, &mut state, from, to);

            emit(&mut controller, &mut state, output)
        }
        Command::Layers {
            drawing,
            layers,
            mappings,
            output,
        } => {
            for mapping in &mappings {
                let Some((original, replacement)) = mapping.split_once('=') else {
                    bail!("Ungueltige Umbenennung '{}', erwartet OLD=NEW", mapping);
                };
                if !state.options.block_name_mapping.insert(original, replacement) {
                    log::warn!("Leere Umbenennung '{}' ignoriert", mapping);
                }
            }

            controller.handle_intent(&mut state, AppIntent::DrawingLoadRequested { path: drawing })?;

            if layers.is_empty() {
                if let Some(drawing) = &state.drawing {
                    for layer in drawing.layer_names() {
                        println!("{layer}");
                    }
                }
                return Ok(());
            }

            controller.handle_intent(&mut state, AppIntent::LayerAnalysisRequested { layers })?;
            emit(&mut controller, &mut state, output)
        }
    }
}

/// Rechnet die Tabelle in die gewünschte Einheit um (Argument, sonst Optionen).
///
/// Eine unbekannte Einheit überspringt nur die Umrechnung; die Tabelle in
/// Zeichnungseinheiten bleibt für die Ausgabe erhalten.
fn apply_target_unit(controller: &mut AppController, state: &mut AppState, from: Option<String>, to: Option<String>) {
    let Some(to) = to.or_else(|| state.options.default_target_unit.map(|unit| unit.to_string())) else {
        return;
    };
    let from = from.unwrap_or_else(|| state.source_unit().to_string());

    if let Err(err) = controller.handle_intent(state, AppIntent::UnitConversionRequested { from, to }) {
        log::warn!("Umrechnung uebersprungen, Ausgabe in Zeichnungseinheiten: {:#}", err);
    }
}

/// Schreibt die aktuelle Tabelle in eine Datei oder auf stdout.
fn emit(controller: &mut AppController, state: &mut AppState, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            controller.handle_intent(state, AppIntent::ExportRequested { path })?;
            if let Some(message) = &state.status_message {
                log::info!("{}", message);
            }
        }
        None => {
            let table = state
                .report
                .as_ref()
                .context("Keine Tabelle vorhanden")?;
            write_table(table, std::io::stdout().lock()).context("CSV-Ausgabe fehlgeschlagen")?;
        }
    }
    Ok(())
}

/// Parst `1,2=Label A|#text:0|#leader:1` in Kurven-IDs und Beschriftungen.
fn parse_group_spec(spec: &str) -> Result<(Vec<u64>, Vec<LabelSource>)> {
    let (ids, labels) = spec.split_once('=').unwrap_or((spec, ""));

    let curve_ids = ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>()
                .with_context(|| format!("Ungueltige Polylinien-ID '{}'", id))
        })
        .collect::<Result<Vec<u64>>>()?;

    let labels = labels
        .split('|')
        .filter(|label| !label.is_empty())
        .map(parse_label)
        .collect::<Result<Vec<LabelSource>>>()?;

    Ok((curve_ids, labels))
}

fn parse_label(label: &str) -> Result<LabelSource> {
    let entity = |raw: &str| {
        raw.trim()
            .parse::<usize>()
            .with_context(|| format!("Ungueltiger Entity-Index in '{}'", label))
    };

    if let Some(index) = label.strip_prefix("#text:") {
        Ok(LabelSource::Entity(EntityRef::Text(entity(index)?)))
    } else if let Some(index) = label.strip_prefix("#leader:") {
        Ok(LabelSource::Entity(EntityRef::Leader(entity(index)?)))
    } else {
        Ok(LabelSource::Literal(label.to_string()))
    }
}
