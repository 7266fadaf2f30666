//! Writer für Zeichnungsdokumente.

use crate::core::{Drawing, Leader};
use glam::DVec3;
use std::fmt::Write as _;

/// Schreibt eine Zeichnung als XML-Dokument.
///
/// Zahlen werden verlustfrei geschrieben; `parse_drawing` liest das Ergebnis
/// unverändert zurück.
pub fn write_drawing(drawing: &Drawing) -> String {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    match drawing.units {
        Some(units) => {
            let _ = writeln!(output, "<Drawing units=\"{}\">", units);
        }
        None => output.push_str("<Drawing>\n"),
    }

    for polyline in drawing.polylines() {
        let _ = writeln!(
            output,
            "    <polyline id=\"{}\" layer=\"{}\">",
            polyline.id,
            escape_xml(&polyline.layer)
        );
        for vertex in &polyline.vertices {
            let _ = write!(output, "        <vertex {}", position_attrs(vertex.position));
            if vertex.bulge != 0.0 {
                let _ = write!(output, " bulge=\"{}\"", format_float(vertex.bulge));
            }
            output.push_str("/>\n");
        }
        output.push_str("    </polyline>\n");
    }

    for marker in &drawing.markers {
        let _ = writeln!(
            output,
            "    <block name=\"{}\" {}/>",
            escape_xml(&marker.name),
            position_attrs(marker.position)
        );
    }

    for annotation in &drawing.annotations {
        let _ = writeln!(
            output,
            "    <text {} value=\"{}\"/>",
            position_attrs(annotation.position),
            escape_xml(&annotation.text)
        );
    }

    for leader in &drawing.leaders {
        write_leader(&mut output, leader);
    }

    output.push_str("</Drawing>\n");
    output
}

fn write_leader(output: &mut String, leader: &Leader) {
    let _ = write!(output, "    <leader arrowhead=\"{}\"", leader.has_arrowhead);
    if let Some(text) = &leader.text {
        let _ = write!(output, " text=\"{}\"", escape_xml(text));
    }
    output.push_str(">\n");
    for vertex in &leader.vertices {
        let _ = writeln!(output, "        <vertex {}/>", position_attrs(*vertex));
    }
    output.push_str("    </leader>\n");
}

fn position_attrs(position: DVec3) -> String {
    format!(
        "x=\"{}\" y=\"{}\" z=\"{}\"",
        format_float(position.x),
        format_float(position.y),
        format_float(position.z)
    )
}

fn format_float(value: f64) -> String {
    format!("{}", value)
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Annotation, LengthUnit, Marker, Polyline, PolylineVertex};
    use crate::xml::parse_drawing;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_write_then_parse_keeps_geometry() {
        let mut drawing = Drawing::new();
        drawing.units = Some(LengthUnit::Cm);
        drawing.add_polyline(Polyline::new(
            4,
            "R&D",
            vec![
                PolylineVertex::with_bulge(DVec3::new(0.1, 0.2, 0.3), -0.25),
                PolylineVertex::new(DVec3::new(1.0 / 3.0, 5.0, 0.0)),
            ],
        ));
        drawing.markers.push(Marker::new(DVec3::new(0.1, 0.2, 0.3), "<Ventil>"));
        drawing
            .annotations
            .push(Annotation::new(DVec3::new(2.0, 2.0, 0.0), "He said, \"go\""));
        drawing.leaders.push(Leader {
            vertices: vec![DVec3::ZERO, DVec3::ONE],
            has_arrowhead: true,
            text: None,
        });

        let parsed = parse_drawing(&write_drawing(&drawing)).expect("Roundtrip sollte parsen");

        assert_eq!(parsed.units, Some(LengthUnit::Cm));
        assert_eq!(parsed.polyline(4), drawing.polyline(4));
        assert_eq!(parsed.markers, drawing.markers);
        assert_eq!(parsed.annotations, drawing.annotations);
        assert_eq!(parsed.leaders, drawing.leaders);
    }
}
