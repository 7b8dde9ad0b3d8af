//! Criterion benchmarks for the scan pipeline phases.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::PathBuf;

use gramscan::corpus::DocumentMap;
use gramscan::index::build_index;
use gramscan::map::AvlMap;
use gramscan::ngram::extract_ngrams;
use gramscan::rank::most_similar;
use gramscan::similarity::score_pairs;

/// Deterministic text: 70% common skeleton, 30% per-document noise.
fn synthetic_text(seed: usize, chars: usize) -> String {
    (0..chars)
        .map(|i| {
            let value = if i % 10 < 7 {
                i.wrapping_mul(31)
            } else {
                i.wrapping_mul(31).wrapping_add(seed.wrapping_mul(101))
            };
            char::from(b'a' + (value % 26) as u8)
        })
        .collect()
}

fn synthetic_corpus(documents: usize, chars: usize) -> DocumentMap {
    let mut corpus = DocumentMap::new();
    for doc in 0..documents {
        corpus.insert(
            PathBuf::from(format!("doc{:04}.txt", doc)),
            extract_ngrams(&synthetic_text(doc, chars), 5),
        );
    }
    corpus
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    let sizes = [1_000, 10_000, 100_000];

    for size in sizes {
        let text = synthetic_text(0, size);

        group.bench_with_input(BenchmarkId::new("extract", size), &size, |b, _| {
            b.iter(|| extract_ngrams(black_box(&text), 5))
        });
    }

    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");

    let corpus_sizes = [10, 50, 100];

    for count in corpus_sizes {
        let corpus = synthetic_corpus(count, 2_000);

        group.bench_with_input(BenchmarkId::new("build", count), &count, |b, _| {
            b.iter(|| build_index(black_box(&corpus)))
        });
    }

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    let corpus_sizes = [10, 25, 50];

    for count in corpus_sizes {
        let index = build_index(&synthetic_corpus(count, 2_000));

        group.bench_with_input(BenchmarkId::new("score_pairs", count), &count, |b, _| {
            b.iter(|| score_pairs(black_box(&index)))
        });
    }

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");

    let corpus_sizes = [10, 50];

    for count in corpus_sizes {
        let similarity = score_pairs(&build_index(&synthetic_corpus(count, 2_000)));

        group.bench_with_input(BenchmarkId::new("most_similar", count), &count, |b, _| {
            b.iter(|| most_similar(black_box(&similarity), 30))
        });
    }

    group.finish();
}

fn bench_ordered_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("avl_map");

    let sizes = [1_000usize, 10_000];

    for size in sizes {
        // Ascending insertion is the rotation-heavy worst case.
        group.bench_with_input(BenchmarkId::new("sorted_insert", size), &size, |b, &n| {
            b.iter(|| {
                let mut map = AvlMap::new();
                for key in 0..n {
                    map.insert(black_box(key), ());
                }
                map
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extraction,
    bench_index_build,
    bench_scoring,
    bench_ranking,
    bench_ordered_map
);
criterion_main!(benches);
