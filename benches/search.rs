use std::hint::black_box;
use std::time::Duration;

use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use indexed_ssp::Cost;
use indexed_ssp::Graph;
use indexed_ssp::VertexId;
use indexed_ssp::bellman_ford::bellman_ford;
use indexed_ssp::dijkstra::dijkstra_lazy;
use indexed_ssp::orx_dijkstra::dijkstra_orx;
use indexed_ssp::shortest_paths;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

type Solver = fn(&Graph, VertexId) -> indexed_ssp::Result<Vec<Cost>>;

const SOLVERS: [(&str, Solver); 2] = [("dijkstra_lazy", dijkstra_lazy), ("dijkstra_orx", dijkstra_orx)];

const SIZES: [usize; 3] = [1_024, 8_192, 32_768];

fn random_graph(n: usize, edge_factor: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(n);
    for id in 0..n as VertexId {
        graph.get_or_create(id);
    }
    for _ in 0..n * edge_factor {
        let u = rng.random_range(0..n) as VertexId;
        let v = rng.random_range(0..n) as VertexId;
        graph
            .add_edge(u, v, rng.random_range(0.0..1_000.0))
            .expect("weights are non-negative");
    }
    graph
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("sssp/random");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(120));
    group.measurement_time(Duration::from_millis(400));

    for &size in &SIZES {
        let graph = random_graph(size, 4, 0x5EED_2026 ^ size as u64);

        group.bench_with_input(BenchmarkId::new("indexed", size), &graph, |bencher, graph| {
            bencher.iter_batched_ref(
                || graph.clone(),
                |g| black_box(shortest_paths(g, 0)),
                BatchSize::LargeInput,
            );
        });

        for (name, solver) in SOLVERS {
            group.bench_with_input(BenchmarkId::new(name, size), &graph, |bencher, graph| {
                bencher.iter(|| black_box(solver(graph, 0)));
            });
        }

        if size <= 1_024 {
            group.bench_with_input(BenchmarkId::new("bellman_ford", size), &graph, |bencher, graph| {
                bencher.iter(|| black_box(bellman_ford(graph, 0)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
