use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use routegraph::{Graph, Metric};

/// Complete bidirected graph over `n` generated city names
fn complete_graph(n: usize) -> (Graph<f64, i64>, Vec<String>) {
    let names: Vec<String> = (0..n).map(|i| format!("N{}", i)).collect();

    let mut graph = Graph::new();
    for (i, a) in names.iter().enumerate() {
        for b in names.iter().skip(i + 1) {
            graph.connect_with_default(a.clone(), b.clone(), (i + 1) as f64, true);
        }
    }

    (graph, names)
}

/// Benchmark exhaustive route enumeration on complete graphs
fn bench_route_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_enumeration");

    for size in [5, 7, 9].iter() {
        let (graph, names) = complete_graph(*size);
        let endpoints = [names[0].clone(), names[*size - 1].clone()];

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let route = graph
                    .get_route(&endpoints, false, true, Metric::EdgeWeight)
                    .unwrap();
                criterion::black_box(route.score);
            });
        });
    }
    group.finish();
}

/// Benchmark the all-cities constrained query (TSP-style)
fn bench_constrained_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("constrained_route");

    for size in [5, 7, 9].iter() {
        let (graph, names) = complete_graph(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let route = graph
                    .get_route(&names, false, true, Metric::EdgeWeight)
                    .unwrap();
                criterion::black_box(route.score);
            });
        });
    }
    group.finish();
}

/// Benchmark graph population throughput
fn bench_graph_population(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_population");

    for size in [10, 20, 40].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let (graph, _) = complete_graph(size);
                criterion::black_box(graph.edge_count());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_route_enumeration,
    bench_constrained_route,
    bench_graph_population
);
criterion_main!(benches);
