//! Criterion micro-benchmarks for the integer kernels.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use intbench_kernels::*;
use intbench_types::constants::MODULUS;

fn bench_summation(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels/summation");
    group.bench_function("sum_range_100k", |b| {
        b.iter(|| sum_range(black_box(100_000)))
    });
    group.bench_function("array_sum_10k_x10", |b| {
        b.iter(|| array_sum(black_box(10_000), black_box(10)))
    });
    group.finish();
}

fn bench_modular(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels/modular");
    group.bench_function("factorial_iterations_500", |b| {
        b.iter(|| factorial_iterations(black_box(500), MODULUS))
    });
    group.bench_function("fibonacci_mod_100k", |b| {
        b.iter(|| fibonacci_mod(black_box(100_000), MODULUS))
    });
    group.bench_function("fibonacci_recursive_20", |b| {
        b.iter(|| fibonacci_recursive(black_box(20)))
    });
    group.finish();
}

fn bench_loops(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels/loops");
    group.bench_function("nested_500x100", |b| {
        b.iter(|| nested_loops(black_box(500), black_box(100)))
    });
    group.bench_function("count_primes_5000", |b| {
        b.iter(|| count_primes(black_box(5000)))
    });
    group.bench_function("count_primes_is_prime_5000", |b| {
        b.iter(|| count_primes_is_prime(black_box(5000)))
    });
    group.finish();
}

criterion_group!(benches, bench_summation, bench_modular, bench_loops);
criterion_main!(benches);
