use approx::assert_relative_eq;
use polyline_stats::core::LEADER_SEARCH_RADIUS;
use polyline_stats::{parse_drawing, write_drawing, EntityRef, LengthUnit, SegmentKind};

const FIXTURE: &str = include_str!("fixtures/site_plan.xml");

#[test]
fn test_fixture_laedt_alle_entities() {
    let drawing = parse_drawing(FIXTURE).expect("Fixture sollte parsen");

    assert_eq!(drawing.units, Some(LengthUnit::M));
    assert_eq!(drawing.polyline_count(), 3);
    assert_eq!(drawing.markers.len(), 3);
    assert_eq!(drawing.annotations.len(), 3);
    assert_eq!(drawing.leaders.len(), 2);
    assert_eq!(drawing.layer_names(), vec!["CABLE", "PIPE"]);
}

#[test]
fn test_fixture_segmente_und_bogen() {
    let drawing = parse_drawing(FIXTURE).expect("Fixture sollte parsen");

    let lines = drawing.polyline(1).expect("Polylinie 1").segments(0);
    assert_eq!(lines.len(), 2);
    assert_relative_eq!(lines[0].length, 5.0, epsilon = 1e-12);
    assert_relative_eq!(lines[1].length, 3.0, epsilon = 1e-12);

    let arc = drawing.polyline(2).expect("Polylinie 2").segments(1);
    assert_eq!(arc.len(), 1);
    assert_eq!(arc[0].kind, SegmentKind::Arc);
    assert_eq!(arc[0].source_curve_index, 1);
    assert_relative_eq!(arc[0].length, 5.0 * std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
}

#[test]
fn test_fixture_entity_texte() {
    let drawing = parse_drawing(FIXTURE).expect("Fixture sollte parsen");

    let text = |entity| drawing.entity_text(entity, LEADER_SEARCH_RADIUS);
    assert_eq!(text(EntityRef::Text(2)).as_deref(), Some("P-07"));
    assert_eq!(text(EntityRef::Leader(0)).as_deref(), Some("DN100"));
    assert_eq!(text(EntityRef::Leader(1)).as_deref(), Some("Zulauf, Nord"));
}

#[test]
fn test_fixture_roundtrip_ueber_writer() {
    let drawing = parse_drawing(FIXTURE).expect("Fixture sollte parsen");
    let reparsed = parse_drawing(&write_drawing(&drawing)).expect("Roundtrip sollte parsen");

    assert_eq!(reparsed.polylines(), drawing.polylines());
    assert_eq!(reparsed.markers, drawing.markers);
    assert_eq!(reparsed.annotations, drawing.annotations);
    assert_eq!(reparsed.leaders, drawing.leaders);
}
