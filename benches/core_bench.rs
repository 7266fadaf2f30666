use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use polyline_stats::core::ASSOCIATION_TOLERANCE;
use polyline_stats::{nearest_marker, parse_drawing, Marker, MarkerIndex, Polyline, PolylineVertex};
use std::hint::black_box;

fn bench_xml_parsing(c: &mut Criterion) {
    let xml_content = include_str!("../tests/fixtures/site_plan.xml");

    c.bench_function("xml_parse_site_plan", |b| {
        b.iter(|| {
            let drawing = parse_drawing(black_box(xml_content)).expect("XML parse failed");
            black_box(drawing.polyline_count())
        })
    });
}

fn build_synthetic_polyline(vertex_count: usize) -> Polyline {
    let vertices = (0..vertex_count)
        .map(|i| {
            let x = i as f64;
            let y = ((i * 7) % 13) as f64;
            // Jedes dritte Segment als Bogen
            let bulge = if i % 3 == 0 { 0.25 } else { 0.0 };
            PolylineVertex::with_bulge(DVec3::new(x, y, 0.0), bulge)
        })
        .collect();
    Polyline::new(1, "BENCH", vertices)
}

fn bench_segmenting(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmenting");

    for &vertex_count in &[1_000usize, 100_000usize] {
        let polyline = build_synthetic_polyline(vertex_count);
        group.bench_with_input(
            BenchmarkId::new("segments", vertex_count),
            &polyline,
            |b, polyline| b.iter(|| black_box(polyline.segments(0).len())),
        );
    }

    group.finish();
}

fn build_synthetic_markers(count: usize) -> Vec<Marker> {
    (0..count)
        .map(|index| {
            let column = (index % 1000) as f64;
            let row = (index / 1000) as f64;
            Marker::new(DVec3::new(column * 3.0, row * 3.0, 0.0), format!("B{index}"))
        })
        .collect()
}

fn build_query_points(count: usize) -> Vec<DVec3> {
    (0..count)
        .map(|i| {
            let x = ((i % 1000) * 3) as f64 + 0.37;
            let y = (((i * 7) % 100) * 3) as f64 + 0.63;
            DVec3::new(x, y, 0.0)
        })
        .collect()
}

fn bench_marker_association(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker_association");
    let query_points = build_query_points(1024);

    for &marker_count in &[1_000usize, 100_000usize] {
        let markers = build_synthetic_markers(marker_count);
        let index = MarkerIndex::from_markers(&markers);

        group.bench_with_input(
            BenchmarkId::new("linear_fold", marker_count),
            &markers,
            |b, markers| {
                b.iter(|| {
                    query_points
                        .iter()
                        .filter(|point| {
                            nearest_marker(black_box(**point), markers, ASSOCIATION_TOLERANCE).is_some()
                        })
                        .count()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("kd_index", marker_count),
            &markers,
            |b, markers| {
                b.iter(|| {
                    query_points
                        .iter()
                        .filter(|point| {
                            index
                                .nearest_within(markers, black_box(**point), ASSOCIATION_TOLERANCE)
                                .is_some()
                        })
                        .count()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_xml_parsing,
    bench_segmenting,
    bench_marker_association
);
criterion_main!(benches);
