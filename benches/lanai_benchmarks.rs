//! Lanai Benchmarks
//!
//! Benchmarks for trie insertion, exact lookup and prefix suggestion, using
//! the Criterion framework for statistical analysis.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lanai::data_structures::LanaiTrie;
use std::time::Duration;

/// Deterministic corpus of `size` distinct entries, some holding a space.
fn corpus(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| {
            let mut n = i;
            let mut word = String::new();
            loop {
                word.push((b'a' + (n % 26) as u8) as char);
                n /= 26;
                if n == 0 {
                    break;
                }
            }
            if i % 7 == 0 {
                word.push_str(" mix");
            }
            word
        })
        .collect()
}

fn bench_lanai_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanai_trie");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let entries = corpus(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("insert", size), &entries, |b, entries| {
            b.iter(|| {
                let mut trie = LanaiTrie::new();
                for entry in entries {
                    trie.insert(black_box(entry)).unwrap();
                }
                trie
            });
        });

        let mut trie = LanaiTrie::new();
        trie.insert_all(&entries).unwrap();

        group.bench_with_input(BenchmarkId::new("contains", size), &entries, |b, entries| {
            b.iter(|| {
                entries
                    .iter()
                    .filter(|entry| trie.contains(black_box(entry)).unwrap())
                    .count()
            });
        });

        group.bench_with_input(BenchmarkId::new("suggest", size), &trie, |b, trie| {
            b.iter(|| trie.suggest(black_box("ab")).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lanai_trie);
criterion_main!(benches);
