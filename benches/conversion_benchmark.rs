//! Benchmark decimal/binary conversion across operand sizes
//!
//! Run with: cargo bench --bench conversion_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand::SeedableRng;

use bitconv::converter::{convert_binary_to_decimal, convert_decimal_to_binary, FormatOptions};

/// Generate a decimal numeral with exactly `digits` digits
fn generate_decimal(digits: usize, seed: u64) -> String {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut s = String::with_capacity(digits);
    s.push(char::from(b'0' + rng.gen_range(1..=9u8)));
    for _ in 1..digits {
        s.push(char::from(b'0' + rng.gen_range(0..=9u8)));
    }
    s
}

fn bench_decimal_to_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_to_binary");
    let grouped = FormatOptions::new(false, true, true);

    for digits in [10usize, 100, 1_000, 10_000] {
        let input = generate_decimal(digits, 42);
        group.throughput(Throughput::Bytes(digits as u64));

        group.bench_with_input(BenchmarkId::new("plain", digits), &input, |b, input| {
            b.iter(|| convert_decimal_to_binary(black_box(input), &FormatOptions::default()))
        });
        group.bench_with_input(BenchmarkId::new("grouped", digits), &input, |b, input| {
            b.iter(|| convert_decimal_to_binary(black_box(input), &grouped))
        });
    }

    group.finish();
}

fn bench_binary_to_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_to_decimal");

    for digits in [10usize, 100, 1_000, 10_000] {
        let decimal = generate_decimal(digits, 7);
        let input = convert_decimal_to_binary(&decimal, &FormatOptions::default())
            .expect("generated decimal is valid");
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(digits), &input, |b, input| {
            b.iter(|| convert_binary_to_decimal(black_box(input), &FormatOptions::default()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decimal_to_binary, bench_binary_to_decimal);
criterion_main!(benches);
