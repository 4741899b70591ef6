//! Benchmark – repeated concatenation into a `StringBuilder` versus the
//! standard library.
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use runebuilder::StringBuilder;

const TEXT: &str = "Hello dear World";

fn builder_concat(text: &str, count: usize) -> String {
    let mut sb = StringBuilder::with_capacity(64);
    for _ in 0..count {
        sb.append(text);
    }
    sb.to_string()
}

fn builder_append_list(text: &str, count: usize) -> String {
    let words = vec![text; count];
    let mut sb = StringBuilder::with_capacity(64);
    sb.append_list(&words);
    sb.to_string()
}

fn string_concat(text: &str, count: usize) -> String {
    let mut s = String::new();
    for _ in 0..count {
        s = s + text;
    }
    s
}

fn string_push_str(text: &str, count: usize) -> String {
    let mut s = String::with_capacity(64);
    for _ in 0..count {
        s.push_str(text);
    }
    s
}

fn bench_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("concat");

    for &count in &[25usize, 250, 2_500] {
        group.bench_with_input(BenchmarkId::new("builder", count), &count, |b, &n| {
            b.iter(|| black_box(builder_concat(black_box(TEXT), n)));
        });
        group.bench_with_input(BenchmarkId::new("builder_list", count), &count, |b, &n| {
            b.iter(|| black_box(builder_append_list(black_box(TEXT), n)));
        });
        group.bench_with_input(BenchmarkId::new("string_add", count), &count, |b, &n| {
            b.iter(|| black_box(string_concat(black_box(TEXT), n)));
        });
        group.bench_with_input(BenchmarkId::new("string_push", count), &count, |b, &n| {
            b.iter(|| black_box(string_push_str(black_box(TEXT), n)));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_concat }
criterion_main!(benches);
