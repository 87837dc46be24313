//! Criterion benchmarks for the layout engine.
//!
//! The force step dominates real-world cost (O(n^2) repulsion), so we
//! track it across graph sizes, plus one full settle run.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use biograph_core::input::{EdgeRecord, GraphData, NodeRecord};
use biograph_engine::{GraphEngine, LayoutConfig, LayoutKind};

/// Ring graph with `n` nodes and a few chords.
fn ring_data(n: usize) -> GraphData {
    let nodes = (0..n)
        .map(|i| NodeRecord {
            id: format!("n{i}"),
            degree: 0,
            centrality: 0.0,
        })
        .collect();
    let mut edges: Vec<EdgeRecord> = (0..n)
        .map(|i| EdgeRecord {
            source: format!("n{i}"),
            target: format!("n{}", (i + 1) % n),
            weight: 1.0,
        })
        .collect();
    for i in (0..n).step_by(7) {
        edges.push(EdgeRecord {
            source: format!("n{i}"),
            target: format!("n{}", (i + n / 2) % n),
            weight: 0.5,
        });
    }
    GraphData { nodes, edges }
}

fn bench_force_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_step");
    for n in [25, 100, 400] {
        let data = ring_data(n);
        group.bench_function(format!("n={n}"), |b| {
            let mut engine =
                GraphEngine::new(&data, LayoutKind::ForceDirected, LayoutConfig::default())
                    .expect("valid data");
            b.iter(|| {
                // Keep the simulation hot so every iteration does work.
                if engine.settled() {
                    engine.set_layout_strategy(LayoutKind::ForceDirected);
                }
                engine.tick();
                black_box(engine.alpha());
            });
        });
    }
    group.finish();
}

fn bench_settle(c: &mut Criterion) {
    let data = ring_data(100);
    c.bench_function("settle_n100", |b| {
        b.iter(|| {
            let mut engine =
                GraphEngine::new(&data, LayoutKind::ForceDirected, LayoutConfig::default())
                    .expect("valid data");
            while !engine.settled() {
                engine.tick();
            }
            black_box(engine.positions().len())
        });
    });
}

fn bench_static_layouts(c: &mut Criterion) {
    let data = ring_data(400);
    c.bench_function("circular_n400", |b| {
        b.iter(|| {
            let engine = GraphEngine::new(&data, LayoutKind::Circular, LayoutConfig::default())
                .expect("valid data");
            black_box(engine.positions().len())
        });
    });
    c.bench_function("hierarchical_n400", |b| {
        b.iter(|| {
            let engine =
                GraphEngine::new(&data, LayoutKind::Hierarchical, LayoutConfig::default())
                    .expect("valid data");
            black_box(engine.positions().len())
        });
    });
}

criterion_group!(benches, bench_force_step, bench_settle, bench_static_layouts);
criterion_main!(benches);
