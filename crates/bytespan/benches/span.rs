// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![expect(missing_docs, reason = "Benchmark code")]

use std::hint::black_box;

use bytespan::ByteSpan;
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

// The test data is "HTTP request sized". Most operations are zero-copy, so the
// size should not matter much, unless we copy it all at once.
const TEST_DATA: &[u8] = &[88_u8; 12345];

fn entrypoint(c: &mut Criterion) {
    let span = ByteSpan::copied_from_slice(TEST_DATA);
    let twin = ByteSpan::copied_from_slice(TEST_DATA);

    let mut group = c.benchmark_group("ByteSpan");

    group.bench_function("new", |b| {
        b.iter(ByteSpan::new);
    });

    group.bench_function("clone", |b| {
        b.iter(|| span.clone());
    });

    group.bench_function("copied_from_slice", |b| {
        b.iter(|| ByteSpan::copied_from_slice(black_box(TEST_DATA)));
    });

    group.bench_function("slice_middle", |b| {
        b.iter(|| span.slice(black_box(100), black_box(1000)));
    });

    group.bench_function("get", |b| {
        b.iter(|| span.get(black_box(1234)));
    });

    group.bench_function("eq_different_backing", |b| {
        b.iter(|| span == twin);
    });

    group.bench_function("iter_sum", |b| {
        b.iter(|| span.iter().map(u64::from).sum::<u64>());
    });

    group.finish();
}
