//! Attribut-Zugriff: liest Attribute eines Elements und parst Zahlenwerte.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use glam::DVec3;
use quick_xml::encoding::Decoder;
use quick_xml::events::BytesStart;

/// Attribute eines Elements, Schlüssel und Werte bereits dekodiert.
pub(super) struct Attributes {
    tag: String,
    values: HashMap<String, String>,
}

impl Attributes {
    /// Liest alle Attribute von `element`.
    pub(super) fn read(decoder: Decoder, tag: &str, element: &BytesStart<'_>) -> Result<Self> {
        let mut values = HashMap::new();
        for attr in element.attributes().with_checks(false) {
            let attr = attr.with_context(|| format!("Ungueltiges Attribut in <{}>", tag))?;
            let key = decoder.decode(attr.key.as_ref())?.into_owned();
            let value = attr.unescape_value()?.into_owned();
            values.insert(key, value);
        }
        Ok(Self {
            tag: tag.to_string(),
            values,
        })
    }

    /// Rohwert eines Attributs.
    pub(super) fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Pflicht-Attribut als String.
    pub(super) fn required(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(value) => Ok(value),
            None => bail!("Attribut '{}' fehlt in <{}>", key, self.tag),
        }
    }

    /// Pflicht-Attribut als endliche Zahl.
    pub(super) fn required_f64(&self, key: &str) -> Result<f64> {
        let raw = self.required(key)?;
        parse_finite(raw).with_context(|| format!("Ungueltiger Wert fuer '{}' in <{}>: '{}'", key, self.tag, raw))
    }

    /// Optionales Zahl-Attribut, fehlend = 0.
    pub(super) fn optional_f64(&self, key: &str) -> Result<f64> {
        match self.get(key) {
            Some(raw) => parse_finite(raw)
                .with_context(|| format!("Ungueltiger Wert fuer '{}' in <{}>: '{}'", key, self.tag, raw)),
            None => Ok(0.0),
        }
    }

    /// Position aus `x`, `y` (Pflicht) und `z` (optional).
    pub(super) fn position(&self) -> Result<DVec3> {
        Ok(DVec3::new(
            self.required_f64("x")?,
            self.required_f64("y")?,
            self.optional_f64("z")?,
        ))
    }

    /// Wahrheitswert (`true`/`false`/`1`/`0`), fehlend = `false`.
    pub(super) fn flag(&self, key: &str) -> Result<bool> {
        match self.get(key).map(str::trim) {
            None | Some("false") | Some("0") => Ok(false),
            Some("true") | Some("1") => Ok(true),
            Some(other) => bail!("Ungueltiger Wahrheitswert fuer '{}' in <{}>: '{}'", key, self.tag, other),
        }
    }
}

fn parse_finite(raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .context("keine gueltige Zahl")?;
    if !value.is_finite() {
        bail!("Zahl muss endlich sein");
    }
    Ok(value)
}

/// Parst eine Polylinien-ID (nicht-negative Ganzzahl).
pub(super) fn parse_polyline_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("Polylinien-ID ist keine gueltige Ganzzahl: '{}'", raw))
}
