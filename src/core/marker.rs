//! Referenzobjekte der Zeichnung: Block-Marker, Texte und Führungslinien.

use glam::DVec3;

/// Ein diskreter Marker (Blockreferenz) als Endpunkt-Anker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Einfügepunkt
    pub position: DVec3,
    /// Blockname
    pub name: String,
}

impl Marker {
    /// Erstellt einen Marker.
    pub fn new(position: DVec3, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

/// Positionierter Text (einzeilig oder mehrzeilig).
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Einfügepunkt
    pub position: DVec3,
    /// Textinhalt
    pub text: String,
}

impl Annotation {
    /// Erstellt einen Text.
    pub fn new(position: DVec3, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// Führungslinie mit optionalem eigenem Text (Multi-Leader).
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    /// Stützpunkte; der letzte ist das Ende an der Beschriftung
    pub vertices: Vec<DVec3>,
    /// Ob die Führungslinie eine Pfeilspitze hat
    pub has_arrowhead: bool,
    /// Eigener Text (nur Multi-Leader)
    pub text: Option<String>,
}

impl Leader {
    /// Letzter Stützpunkt der Führungslinie.
    pub fn end_point(&self) -> Option<DVec3> {
        self.vertices.last().copied()
    }
}

/// Verweis auf ein beschriftendes Entity der Zeichnung (Index in der Liste).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    /// Index in `Drawing::annotations`
    Text(usize),
    /// Index in `Drawing::leaders`
    Leader(usize),
}
