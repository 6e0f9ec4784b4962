//! Factorial-with-modulo workload.

use std::hint::black_box;

/// `k! mod m`, reducing after every multiplication.
///
/// `0!` and `1!` are both 1 (reduced, so `m == 1` yields 0).
/// `m` must be non-zero.
pub fn factorial_mod(k: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be non-zero");
    let mut result = 1 % m;
    let mut i = 1u64;
    while i <= k {
        result = (result * i) % m;
        i += 1;
    }
    result
}

/// Compute `k! mod m` for every `k in 0..n` and return how many were computed.
///
/// The factorial values themselves are discarded; the returned count is
/// always `n`. Each value goes through `black_box` so the inner loop
/// survives optimisation. `m` must be non-zero.
pub fn factorial_iterations(n: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be non-zero");
    let mut count = 0u64;
    while count < n {
        black_box(factorial_mod(count, m));
        count += 1;
    }
    count
}
