use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::HashMap;
use waypoint::{can_reach, longest_word, short_words, unreachable, Airport, Dfs, Vertex};

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn words(n: usize) -> Vec<String> {
    (0..n).map(|i| "w".repeat(1 + i % 13)).collect()
}

fn bench_vertex_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex");

    for &size in SIZES {
        let words = words(size);
        let vertices: Vec<Vertex<&str>> =
            words.iter().map(|w| Vertex::new(w.as_str())).collect();
        // Chain with a back edge every 16 vertices: deep and cyclic.
        for (i, v) in vertices.iter().enumerate() {
            v.connect(&vertices[(i + 1) % size]);
            if i % 16 == 0 {
                v.connect(&vertices[i / 2]);
            }
        }
        group.throughput(Throughput::Elements(size as u64));

        let start = &vertices[0];

        group.bench_function(BenchmarkId::new("dfs", size), |b| {
            b.iter(|| black_box(Dfs::new(start).count()));
        });
        group.bench_function(BenchmarkId::new("short_words", size), |b| {
            b.iter(|| black_box(short_words(start, 6).count()));
        });
        group.bench_function(BenchmarkId::new("longest_word", size), |b| {
            b.iter(|| black_box(longest_word(start).len()));
        });
    }
    group.finish();
}

fn bench_can_reach(c: &mut Criterion) {
    let mut group = c.benchmark_group("airport");

    for &size in SIZES {
        let airports: Vec<Airport> =
            (0..size).map(|i| Airport::new(format!("A{i}"))).collect();
        for (i, a) in airports.iter().enumerate() {
            a.add_flight(&airports[(i * 7 + 1) % size]);
            a.add_flight(&airports[(i * 3 + 2) % size]);
        }
        let nowhere = Airport::new("NOWHERE");
        let (from, to) = (&airports[0], &nowhere);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("can_reach_miss", size), |b| {
            b.iter(|| black_box(can_reach(from, to)));
        });
    }
    group.finish();
}

fn bench_unreachable(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency_map");

    for &size in SIZES {
        let graph: HashMap<usize, Vec<usize>> = (0..size)
            .map(|k| (k, vec![(k * 2 + 1) % size, (k + size / 3) % size, size + k]))
            .collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("unreachable", size), |b| {
            b.iter(|| black_box(unreachable(&graph, &0).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_vertex_queries, bench_can_reach, bench_unreachable);
criterion_main!(benches);
