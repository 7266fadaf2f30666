//! Längeneinheiten und Umrechnungsfaktoren.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// Unterstützte Längeneinheiten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimeter
    Mm,
    /// Zentimeter
    Cm,
    /// Meter
    M,
    /// Kilometer
    Km,
}

impl LengthUnit {
    /// Alle Einheiten in aufsteigender Größe.
    pub const ALL: [LengthUnit; 4] = [LengthUnit::Mm, LengthUnit::Cm, LengthUnit::M, LengthUnit::Km];

    /// Faktor zu Metern.
    pub fn to_meters(self) -> f64 {
        match self {
            LengthUnit::Mm => 0.001,
            LengthUnit::Cm => 0.01,
            LengthUnit::M => 1.0,
            LengthUnit::Km => 1000.0,
        }
    }

    /// Kürzel, wie es in Spaltenköpfen erscheint.
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Mm => "mm",
            LengthUnit::Cm => "cm",
            LengthUnit::M => "m",
            LengthUnit::Km => "km",
        }
    }

    /// Multiplikator für Längen von `from` nach `to`.
    pub fn factor(from: LengthUnit, to: LengthUnit) -> f64 {
        from.to_meters() / to.to_meters()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" => Ok(LengthUnit::Mm),
            "cm" => Ok(LengthUnit::Cm),
            "m" => Ok(LengthUnit::M),
            "km" => Ok(LengthUnit::Km),
            _ => Err(AnalysisError::UnitConversionUnknown(s.to_string())),
        }
    }
}
