//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand einer Analyse-Sitzung (Zeichnung,
/// gesammelte Gruppen, zuletzt erzeugte Tabellen).
pub mod state;
pub mod use_cases;

pub use crate::core::{AnalysisSession, Drawing, LengthUnit, ReportTable};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, LabelSource};
pub use state::AppState;
