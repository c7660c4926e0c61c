use std::time::Duration;

use adjgraph::{
    Graph, GraphConfig,
    bench_utils::{GraphShape, generate_graph},
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const ER_SEED: u64 = 0x99AA;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

struct ReadyGraph {
    label: String,
    graph: Graph<usize>,
}

fn bench_scales() -> &'static [usize] {
    #[cfg(feature = "bench-ci")]
    {
        &[1_000, 5_000]
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        &[10_000, 50_000, 100_000]
    }
}

fn cases(config: GraphConfig) -> Vec<ReadyGraph> {
    let mut cases = Vec::new();
    for &nodes in bench_scales() {
        let shapes = [
            ("line", GraphShape::Line),
            (
                "er",
                GraphShape::RandomErdosRenyi {
                    edges: nodes.saturating_mul(3),
                },
            ),
        ];
        for (name, shape) in shapes {
            let graph = generate_graph(&shape, nodes, ER_SEED + nodes as u64, config)
                .expect("generated graph");
            cases.push(ReadyGraph {
                label: format!("{name}_{nodes}"),
                graph,
            });
        }
    }
    cases
}

fn bench_closure(c: &mut Criterion) {
    let cases = cases(GraphConfig::undirected());
    let mut group = c.benchmark_group("transitive_closure");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in &cases {
        group.bench_function(BenchmarkId::from_parameter(&case.label), |b| {
            b.iter(|| case.graph.transitive_closure(&0).expect("closure"));
        });
    }
    group.finish();
}

fn bench_cycle_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_cycle");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for config in [GraphConfig::undirected(), GraphConfig::directed()] {
        for case in cases(config) {
            let id = format!("{}_{}", if config.directed { "dir" } else { "undir" }, case.label);
            group.bench_function(BenchmarkId::from_parameter(id), |b| {
                b.iter(|| case.graph.has_cycle(&0).expect("cycle"));
            });
        }
    }
    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let cases = cases(GraphConfig::undirected());
    let mut group = c.benchmark_group("structure");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in &cases {
        group.bench_function(BenchmarkId::new("is_tree", &case.label), |b| {
            b.iter(|| case.graph.is_tree());
        });
        group.bench_function(BenchmarkId::new("is_regular", &case.label), |b| {
            b.iter(|| case.graph.is_regular());
        });
    }
    group.finish();
}

criterion_group!(
    name = traversal_benches;
    config = Criterion::default();
    targets = bench_closure, bench_cycle_detection, bench_structure
);
criterion_main!(traversal_benches);
