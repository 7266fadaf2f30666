//! Parser für Zeichnungsdokumente.

mod attributes;

use crate::core::{Annotation, Drawing, Leader, LengthUnit, Marker, Polyline, PolylineVertex};
use anyhow::{bail, Context, Result};
use attributes::{parse_polyline_id, Attributes};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Zustand für geöffnete Container-Elemente (`<polyline>`, `<leader>`).
enum OpenContainer {
    Polyline(Polyline),
    Leader(Leader),
}

/// Parsed eine Zeichnung aus einem XML-String
pub fn parse_drawing(xml_content: &str) -> Result<Drawing> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();
    let mut drawing = Drawing::new();
    let mut seen_root = false;
    let mut open: Option<OpenContainer> = None;

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?.into_owned();
                let attrs = Attributes::read(reader.decoder(), &tag, e)?;
                handle_element(&tag, &attrs, &mut drawing, &mut open, &mut seen_root)?;
            }
            Ok(Event::Empty(ref e)) => {
                // Leere Container (<polyline .../>) werden sofort abgeschlossen
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?.into_owned();
                let attrs = Attributes::read(reader.decoder(), &tag, e)?;
                handle_element(&tag, &attrs, &mut drawing, &mut open, &mut seen_root)?;
                if is_container(&tag) {
                    close_container(&tag, &mut drawing, &mut open)?;
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?;
                if is_container(&tag) {
                    close_container(&tag, &mut drawing, &mut open)?;
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des XML"),
            _ => {}
        }

        buffer.clear();
    }

    if !seen_root {
        bail!("Wurzelelement <Drawing> fehlt");
    }
    if open.is_some() {
        bail!("Dokument endet innerhalb eines <polyline>- oder <leader>-Elements");
    }

    log::info!(
        "Zeichnung geladen: {} Polylinien, {} Bloecke, {} Texte, {} Fuehrungslinien",
        drawing.polyline_count(),
        drawing.markers.len(),
        drawing.annotations.len(),
        drawing.leaders.len()
    );

    Ok(drawing)
}

fn is_container(tag: &str) -> bool {
    tag == "polyline" || tag == "leader"
}

fn handle_element(
    tag: &str,
    attrs: &Attributes,
    drawing: &mut Drawing,
    open: &mut Option<OpenContainer>,
    seen_root: &mut bool,
) -> Result<()> {
    match tag {
        "Drawing" => {
            *seen_root = true;
            if let Some(units) = attrs.get("units") {
                let units = units
                    .parse::<LengthUnit>()
                    .context("Ungueltige Zeichnungseinheit in <Drawing>")?;
                drawing.units = Some(units);
            }
        }
        "polyline" => {
            if open.is_some() {
                bail!("<polyline> darf nicht verschachtelt werden");
            }
            let id = parse_polyline_id(attrs.required("id")?)?;
            let layer = attrs.get("layer").unwrap_or("0");
            *open = Some(OpenContainer::Polyline(Polyline::new(id, layer, Vec::new())));
        }
        "leader" => {
            if open.is_some() {
                bail!("<leader> darf nicht verschachtelt werden");
            }
            *open = Some(OpenContainer::Leader(Leader {
                vertices: Vec::new(),
                has_arrowhead: attrs.flag("arrowhead")?,
                text: attrs.get("text").map(str::to_string),
            }));
        }
        "vertex" => {
            let position = attrs.position().context("Ungueltiger <vertex>")?;
            match open.as_mut() {
                Some(OpenContainer::Polyline(polyline)) => {
                    let bulge = attrs.optional_f64("bulge")?;
                    polyline
                        .vertices
                        .push(PolylineVertex::with_bulge(position, bulge));
                }
                Some(OpenContainer::Leader(leader)) => leader.vertices.push(position),
                None => bail!("<vertex> ausserhalb von <polyline> oder <leader>"),
            }
        }
        "block" => {
            let position = attrs.position().context("Ungueltiger <block>")?;
            let name = attrs.required("name")?;
            drawing.markers.push(Marker::new(position, name));
        }
        "text" | "mtext" => {
            let position = attrs
                .position()
                .with_context(|| format!("Ungueltiger <{}>", tag))?;
            let value = attrs.get("value").unwrap_or_default();
            drawing.annotations.push(Annotation::new(position, value));
        }
        other => log::debug!("Unbekanntes Element <{}> ignoriert", other),
    }
    Ok(())
}

fn close_container(tag: &str, drawing: &mut Drawing, open: &mut Option<OpenContainer>) -> Result<()> {
    match (tag, open.take()) {
        ("polyline", Some(OpenContainer::Polyline(polyline))) => {
            let id = polyline.id;
            if !drawing.add_polyline(polyline) {
                bail!("Doppelte Polylinien-ID: {}", id);
            }
        }
        ("leader", Some(OpenContainer::Leader(leader))) => drawing.leaders.push(leader),
        (_, _) => bail!("Unerwartetes Ende von <{}>", tag),
    }
    Ok(())
}
