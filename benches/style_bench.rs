use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ecomap_annotator::core::ShapeDraft;
use ecomap_annotator::render::{LabelMetrics, NumberFormat};
use ecomap_annotator::{compute_style, format_area, FeatureStore, StyleCache, StyleParams};
use glam::DVec2;
use std::hint::black_box;

/// Freihand-artiger Ring mit `points` Stützpunkten um einen Mittelpunkt im Nordatlantik.
fn build_wobbly_ring(points: usize) -> Vec<DVec2> {
    let center = DVec2::new(-26.3, 59.99);
    (0..points)
        .map(|i| {
            let angle = i as f64 / points as f64 * std::f64::consts::TAU;
            let radius = 0.05 + 0.01 * (angle * 7.0).sin();
            center + DVec2::new(angle.cos() * radius * 2.0, angle.sin() * radius)
        })
        .collect()
}

fn build_store(shape_count: usize, points: usize) -> FeatureStore {
    let mut store = FeatureStore::new();
    for index in 0..shape_count {
        let offset = DVec2::new(index as f64 * 0.2, 0.0);
        store.insert(
            ShapeDraft {
                row_id: (index % 4) as u64 + 1,
                name: "Coral Reef".into(),
                color: "#FF7F50".into(),
                ring: build_wobbly_ring(points)
                    .into_iter()
                    .map(|p| p + offset)
                    .collect(),
                area_label: "12.3 km²".into(),
                density: 50,
            },
            true,
        );
    }
    store
}

fn bench_compute_style(c: &mut Criterion) {
    let store = build_store(1, 64);
    let shape = &store.shapes()[0];
    let metrics = LabelMetrics::default();
    let params = StyleParams {
        zoom_level: 9.0,
        show_labels: true,
        is_selected: false,
    };

    c.bench_function("compute_style_with_labels", |b| {
        b.iter(|| black_box(compute_style(black_box(shape), &params, &metrics)))
    });
}

fn bench_style_cache(c: &mut Criterion) {
    let store = build_store(500, 64);
    let params = StyleParams {
        zoom_level: 9.0,
        show_labels: true,
        is_selected: false,
    };

    let mut group = c.benchmark_group("style_cache_frame");

    group.bench_function("warm_hits", |b| {
        let mut cache = StyleCache::new(2048, LabelMetrics::default());
        for shape in store.shapes() {
            cache.get_or_compute(shape, &params);
        }
        b.iter(|| {
            for shape in store.shapes() {
                black_box(cache.get_or_compute(shape, &params));
            }
        })
    });

    group.bench_function("cold_misses", |b| {
        b.iter(|| {
            let mut cache = StyleCache::new(2048, LabelMetrics::default());
            for shape in store.shapes() {
                black_box(cache.get_or_compute(shape, &params));
            }
        })
    });

    group.finish();
}

fn bench_format_area(c: &mut Criterion) {
    let format = NumberFormat::default();
    let mut group = c.benchmark_group("format_area_ring");

    for points in [64usize, 1_000, 10_000] {
        let ring = build_wobbly_ring(points);
        group.bench_with_input(BenchmarkId::from_parameter(points), &ring, |b, ring| {
            b.iter(|| black_box(format_area(black_box(ring), &format)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_style,
    bench_style_cache,
    bench_format_area
);
criterion_main!(benches);
