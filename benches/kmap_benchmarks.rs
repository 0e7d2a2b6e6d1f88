//! Benchmark suite for Karnaugh map minimization
//!
//! Measures the catalog-driven prime implicant search and the full solve on a
//! handful of characteristic maps, plus a sweep over a slice of all functions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmap_logic::{find_prime_implicants, minimize, Mode, TermSet};

/// Named maps with distinct cover shapes
fn characteristic_maps() -> Vec<(&'static str, TermSet, TermSet)> {
    let terms = |cells: &[u8]| TermSet::try_from(cells).unwrap_or_default();
    vec![
        ("single_minterm", terms(&[5]), TermSet::EMPTY),
        ("corners", terms(&[0, 2, 8, 10]), TermSet::EMPTY),
        ("cyclic", terms(&[0, 1, 2, 5, 6, 7]), TermSet::EMPTY),
        ("checkerboard", TermSet::from_bits(0x6996), TermSet::EMPTY),
        ("with_dont_cares", terms(&[1, 3, 4, 9, 12]), terms(&[5, 7, 13, 15])),
    ]
}

fn bench_prime_implicants(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_implicants");

    for (name, targets, dont_cares) in characteristic_maps() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &(targets, dont_cares), |b, &(t, d)| {
            b.iter(|| find_prime_implicants(black_box(t), black_box(d)))
        });
    }

    group.finish();
}

fn bench_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");

    for mode in [Mode::Sop, Mode::Pos] {
        for (name, targets, dont_cares) in characteristic_maps() {
            let id = BenchmarkId::new(mode.to_string(), name);
            group.bench_with_input(id, &(targets, dont_cares), |b, &(t, d)| {
                b.iter(|| minimize(black_box(t), black_box(d), mode))
            });
        }
    }

    group.finish();
}

fn bench_function_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let functions: Vec<TermSet> = (0..=u16::MAX).step_by(64).map(TermSet::from_bits).collect();
    group.throughput(Throughput::Elements(functions.len() as u64));

    group.bench_function("sop_every_64th", |b| {
        b.iter(|| {
            for &targets in &functions {
                black_box(minimize(targets, TermSet::EMPTY, Mode::Sop));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_prime_implicants, bench_minimize, bench_function_sweep);
criterion_main!(benches);
