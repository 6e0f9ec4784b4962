//! Fixed workload constants and harness defaults.
//!
//! Workload sizes are baked in. They are never read from config.

/// Modulus used by the factorial and Fibonacci workloads (1e9 + 7).
pub const MODULUS: u64 = 1_000_000_007;

/// Upper bound (exclusive) of the range-summation workload.
pub const SUM_RANGE_N: u64 = 5_000_000;

/// Number of entries in the array-summation workload.
pub const ARRAY_SUM_SIZE: u64 = 100_000;

/// Number of passes over the array in the array-summation workload.
pub const ARRAY_SUM_PASSES: u64 = 100;

/// Number of factorials computed by the factorial workload.
pub const FACTORIAL_N: u64 = 5000;

/// Number of recurrence steps in the modular Fibonacci workload.
pub const FIBONACCI_MOD_N: u64 = 1_000_000;

/// Argument of the naive recursive Fibonacci workload.
pub const FIBONACCI_RECURSIVE_N: u64 = 35;

/// Outer trip count of the nested-loop workload.
pub const NESTED_OUTER: u64 = 5000;

/// Inner trip count of the nested-loop workload.
pub const NESTED_INNER: u64 = 1000;

/// Exclusive candidate limit of the main prime-counting workload.
pub const PRIMES_LIMIT: u64 = 50_000;

/// Exclusive candidate limit of the small prime-counting workload.
pub const PRIMES_SMALL_LIMIT: u64 = 10_000;

/// Default number of timed runs per workload.
pub const DEFAULT_RUNS: u32 = 5;

/// Default number of untimed warmup runs per workload.
pub const DEFAULT_WARMUP_RUNS: u32 = 1;
