//! XML Import/Export für Zeichnungsdokumente.
//!
//! Eine Zeichnung besteht aus Polylinien (mit Bulge-Stützpunkten), Blöcken,
//! Texten und Führungslinien. Alle Nutzdaten stehen in Attributen.

///
/// Das Format ist flach: `<Drawing>` enthält `<polyline>`, `<block>`,
/// `<text>`/`<mtext>` und `<leader>` in beliebiger Reihenfolge.
pub mod parser;
pub mod writer;

pub use parser::parse_drawing;
pub use writer::write_drawing;
