//! typeahead engine benchmarks.
//!
//! Micro-benchmarks for the two suggestion engines, implemented with the
//! Criterion framework. The corpus-level comparison (file sampling, random
//! prefixes, cross-checked results) lives in the `typeahead` binary; these
//! benchmarks isolate the raw engine operations.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode,
};
use std::time::Duration;

use typeahead::{PrefixHashIndex, Trie};

/// Synthetic corpus of `groups * per_group` entries sharing per-group stems.
fn corpus(groups: usize, per_group: usize) -> Vec<String> {
    let mut entries = Vec::with_capacity(groups * per_group);
    for g in 0..groups {
        for i in 0..per_group {
            entries.push(format!("stem_{g}_word_{i}"));
        }
    }
    entries
}

/// Benchmark the character trie engine.
fn bench_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Insertion with different entry lengths.
    for entry_length in [8, 16, 32, 64].iter() {
        group.bench_with_input(
            BenchmarkId::new("insert", entry_length),
            entry_length,
            |b, &length| {
                let entries: Vec<String> = (0..1000)
                    .map(|i| format!("{i:0width$}", width = length))
                    .collect();

                let mut trie = Trie::new();
                let mut index = 0;
                b.iter(|| {
                    let entry = &entries[index % entries.len()];
                    index += 1;
                    trie.insert(black_box(entry)).unwrap();
                });
            },
        );
    }

    // Querying a shared stem enumerates a subtree of known size.
    for per_group in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("query_subtree", per_group),
            per_group,
            |b, &per_group| {
                let mut trie = Trie::new();
                for entry in corpus(100, per_group) {
                    trie.insert(&entry).unwrap();
                }

                let mut stem = 0;
                b.iter(|| {
                    let prefix = format!("stem_{}_", stem % 100);
                    stem += 1;
                    black_box(trie.query(&prefix));
                });
            },
        );
    }

    // Miss: the walk exits at the first absent character.
    group.bench_function("query_miss", |b| {
        let mut trie = Trie::new();
        for entry in corpus(100, 10) {
            trie.insert(&entry).unwrap();
        }

        b.iter(|| {
            black_box(trie.query(black_box("zzz_no_such_stem")));
        });
    });

    group.finish();
}

/// Benchmark the prefix-hash index engine.
fn bench_prefix_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_hash");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Insertion registers one key per proper prefix, so entry length
    // dominates.
    for entry_length in [8, 16, 32, 64].iter() {
        group.bench_with_input(
            BenchmarkId::new("insert", entry_length),
            entry_length,
            |b, &length| {
                let entries: Vec<String> = (0..1000)
                    .map(|i| format!("{i:0width$}", width = length))
                    .collect();

                let mut prefix_index = PrefixHashIndex::new();
                let mut index = 0;
                b.iter(|| {
                    let entry = &entries[index % entries.len()];
                    index += 1;
                    prefix_index.insert(black_box(entry));
                });
            },
        );
    }

    // Query is a single hash lookup plus a clone of the stored set.
    for per_group in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("query", per_group),
            per_group,
            |b, &per_group| {
                let mut prefix_index = PrefixHashIndex::new();
                for entry in corpus(100, per_group) {
                    prefix_index.insert(&entry);
                }

                let mut stem = 0;
                b.iter(|| {
                    let prefix = format!("stem_{}_", stem % 100);
                    stem += 1;
                    black_box(prefix_index.query(&prefix));
                });
            },
        );
    }

    group.bench_function("query_miss", |b| {
        let mut prefix_index = PrefixHashIndex::new();
        for entry in corpus(100, 10) {
            prefix_index.insert(&entry);
        }

        b.iter(|| {
            black_box(prefix_index.query(black_box("zzz_no_such_stem")));
        });
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_trie, bench_prefix_hash
}

criterion_main!(benches);
