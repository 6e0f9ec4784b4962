//! Summation workloads.
//!
//! The accumulator passes through `black_box` on every iteration so the
//! loops are not folded into their closed forms.

use std::hint::black_box;

/// Accumulate the integers `0..n`.
pub fn sum_range(n: u64) -> u64 {
    let mut sum = 0u64;
    let mut i = 0u64;
    while i < n {
        sum = black_box(sum + i);
        i += 1;
    }
    sum
}

/// Fill an array with `0..size`, then sum it `passes` times.
pub fn array_sum(size: u64, passes: u64) -> u64 {
    let arr: Vec<u64> = (0..size).collect();

    let mut sum = 0u64;
    for _ in 0..passes {
        for &value in &arr {
            sum = black_box(sum + value);
        }
    }
    sum
}
