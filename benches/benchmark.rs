// Performance benchmarks for the distance algorithms and ranked search
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzyrank::{jaro_winkler_distance, ngram_distance, search, SearchConfig};
use rand::prelude::*;
use serde_json::{json, Value};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz ";

fn generate_random_text(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

fn generate_candidates(count: usize) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|id| {
            let len = rng.random_range(4..40);
            json!({"id": id, "label": generate_random_text(&mut rng, len)})
        })
        .collect()
}

fn benchmark_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    let mut rng = StdRng::seed_from_u64(7);

    for len in [8, 64, 512].iter() {
        let a = generate_random_text(&mut rng, *len);
        let b = generate_random_text(&mut rng, *len);

        group.bench_with_input(BenchmarkId::new("ngram", len), len, |bench, _| {
            bench.iter(|| ngram_distance(black_box(&a), black_box(&b), 2));
        });
        group.bench_with_input(BenchmarkId::new("jaro_winkler", len), len, |bench, _| {
            bench.iter(|| jaro_winkler_distance(black_box(&a), black_box(&b), 0.1));
        });
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1000, 10000].iter() {
        let candidates = generate_candidates(*size);

        let sequential = SearchConfig::builder()
            .results(10)
            .parallel_threshold(0)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| {
                let results = search(black_box("quick brown fox"), &candidates, &sequential).unwrap();
                black_box(results);
            });
        });

        let parallel = SearchConfig::builder()
            .results(10)
            .parallel_threshold(1)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| {
                let results = search(black_box("quick brown fox"), &candidates, &parallel).unwrap();
                black_box(results);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_distances, benchmark_search);
criterion_main!(benches);
