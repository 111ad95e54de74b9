//! Criterion benchmarks for building merges, grids, and scene sync.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use jamscape_bench::{city_fragments, downtown_extent, fleet_requests};
use jamscape_grid::RadioMap;
use jamscape_mesh::{BoundingVolumeAggregator, SuffixSet};
use jamscape_motion::MotionEngine;
use jamscape_test_utils::{MockFieldSolver, MockScene};

/// Benchmark: merge 3K fragments into 1K buildings.
fn bench_merge_1k_buildings(c: &mut Criterion) {
    let fragments = city_fragments(1_000, 42);
    let aggregator = BoundingVolumeAggregator::with_suffixes(SuffixSet::itu_materials());

    c.bench_function("merge_1k_buildings", |b| {
        b.iter(|| {
            let volumes = aggregator.merge(&fragments);
            black_box(&volumes);
        });
    });
}

/// Benchmark: build a 1 m grid over the reference map (1M cells).
fn bench_grid_1m_cells(c: &mut Criterion) {
    let extent = downtown_extent();

    c.bench_function("grid_1m_cells", |b| {
        b.iter(|| {
            let grid = extent.grid([1.0, 1.0]).build().unwrap();
            black_box(grid.cell_count());
        });
    });
}

/// Benchmark: push 256 positions into a scene, one step at a time.
fn bench_scene_sync_256(c: &mut Criterion) {
    let extent = downtown_extent();
    let requests = fleet_requests(256, 100, 42);
    let mut scene = MockScene::new();
    for (id, spec) in &requests {
        scene.add(id.as_str(), spec.start);
    }
    let mut engine = MotionEngine::new(Some(extent.bounds()));
    engine.add_random_walks(requests);

    c.bench_function("scene_sync_256", |b| {
        b.iter(|| {
            for step in 0..engine.max_path_length() {
                let report = engine.update_scene_transmitters(&mut scene, step);
                black_box(&report);
            }
        });
    });
}

/// Benchmark: assemble a radio map for 16 emitters on a 10 m grid.
fn bench_radio_map_16(c: &mut Criterion) {
    let extent = downtown_extent();
    let grid = extent.grid([10.0, 10.0]).height(1.5).build().unwrap();
    let mut engine = MotionEngine::new(Some(extent.bounds()));
    engine.add_random_walks(fleet_requests(16, 10, 42));
    let positions = engine.positions_at_step(5);
    let mut solver = MockFieldSolver::new();

    c.bench_function("radio_map_16", |b| {
        b.iter(|| {
            let map = RadioMap::compute(&mut solver, &grid, &positions).unwrap();
            black_box(map.combined());
        });
    });
}

criterion_group!(
    benches,
    bench_merge_1k_buildings,
    bench_grid_1m_cells,
    bench_scene_sync_256,
    bench_radio_map_16
);
criterion_main!(benches);
