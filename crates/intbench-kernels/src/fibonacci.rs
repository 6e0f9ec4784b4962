//! Fibonacci workloads.
//!
//! Two unrelated benchmarks share the name: a modular iterative recurrence
//! and a naive doubly-recursive call tree. Both are kept.

/// Iterate `a, b = b, (a + b) mod m` for `n` steps from `a = 0, b = 1` and return `a`.
///
/// `m` must be non-zero.
pub fn fibonacci_mod(n: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be non-zero");
    let mut a = 0u64;
    let mut b = 1u64;
    let mut count = 0u64;
    while count < n {
        let next = (a + b) % m;
        a = b;
        b = next;
        count += 1;
    }
    a
}

/// Naive exponential-time `fib(n)`, a call-overhead probe.
pub fn fibonacci_recursive(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2)
}
