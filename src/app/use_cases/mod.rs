//! Use-Cases: eine Funktion pro fachlicher Aktion auf dem AppState.

pub mod analysis;
pub mod export;
pub mod file_io;
pub mod layers;
