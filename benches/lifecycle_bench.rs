//! Benchmark for assignment and destruction.
//!
//! Measures switching the live alternative, same-side reuse and container
//! copies against plain reassignment of a native enum.

use criterion::{Criterion, criterion_group, criterion_main};
use inline_either::{Alternative, ByteEither, UnionEither};
use std::hint::black_box;

fn benchmark_switching(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("switching");

    group.bench_function("union_switch", |bencher| {
        let mut either: UnionEither<u64, String> = UnionEither::new_left(0);
        bencher.iter(|| {
            either.assign_right(String::from("switch"));
            either.assign_left(black_box(1));
        });
    });

    group.bench_function("bytes_switch", |bencher| {
        let mut either: ByteEither<u64, String> = ByteEither::new_left(0);
        bencher.iter(|| {
            either.assign_right(String::from("switch"));
            either.assign_left(black_box(1));
        });
    });

    group.bench_function("native_enum_switch", |bencher| {
        let mut alternative: Alternative<u64, String> = Alternative::Left(0);
        bencher.iter(|| {
            alternative = Alternative::Right(String::from("switch"));
            alternative = Alternative::Left(black_box(1));
        });
    });

    group.finish();
}

fn benchmark_same_side(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("same_side");
    let source = "a reasonably long string that keeps its buffer".to_string();

    group.bench_function("assign_right_cloned", |bencher| {
        let mut either: UnionEither<u64, String> = UnionEither::new_right(String::new());
        bencher.iter(|| either.assign_right_cloned(black_box(&source)));
    });

    group.bench_function("assign_right_fresh_clone", |bencher| {
        let mut either: UnionEither<u64, String> = UnionEither::new_right(String::new());
        bencher.iter(|| either.assign_right(black_box(&source).clone()));
    });

    group.bench_function("clone_from_rebuilds", |bencher| {
        let original: UnionEither<u64, String> = UnionEither::new_right(source.clone());
        let mut either: UnionEither<u64, String> = UnionEither::new_right(String::new());
        bencher.iter(|| either.clone_from(black_box(&original)));
    });

    group.finish();
}

fn benchmark_drop(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("drop");

    group.bench_function("union_vec", |bencher| {
        bencher.iter(|| {
            let values: Vec<UnionEither<u64, Vec<u8>>> = (0..256)
                .map(|index| {
                    if index % 3 == 0 {
                        UnionEither::new_right(vec![0; 16])
                    } else {
                        UnionEither::new_left(index)
                    }
                })
                .collect();
            drop(black_box(values));
        });
    });

    group.bench_function("native_enum_vec", |bencher| {
        bencher.iter(|| {
            let values: Vec<Alternative<u64, Vec<u8>>> = (0..256)
                .map(|index| {
                    if index % 3 == 0 {
                        Alternative::Right(vec![0; 16])
                    } else {
                        Alternative::Left(index)
                    }
                })
                .collect();
            drop(black_box(values));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_switching,
    benchmark_same_side,
    benchmark_drop
);

criterion_main!(benches);
