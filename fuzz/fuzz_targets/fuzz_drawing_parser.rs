#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(xml) = std::str::from_utf8(data) else {
        return;
    };
    // Parser darf bei beliebiger Eingabe nur Fehler liefern, nie paniken
    if let Ok(drawing) = polyline_stats::parse_drawing(xml) {
        for polyline in drawing.polylines() {
            let _ = polyline.segments(0);
        }
    }
});
