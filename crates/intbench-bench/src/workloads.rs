//! Workload registry: each named benchmark with its baked-in constants.
//!
//! Where the original scripts had two divergent versions under one name
//! (primes, Fibonacci, summation), both are registered as separate
//! workloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use intbench_kernels as kernels;
use intbench_types::constants::{
    ARRAY_SUM_PASSES, ARRAY_SUM_SIZE, DEFAULT_RUNS, DEFAULT_WARMUP_RUNS, FACTORIAL_N,
    FIBONACCI_MOD_N, FIBONACCI_RECURSIVE_N, MODULUS, NESTED_INNER, NESTED_OUTER, PRIMES_LIMIT,
    PRIMES_SMALL_LIMIT, SUM_RANGE_N,
};
use intbench_types::{IntBenchError, IntBenchResult};

/// Which benchmark to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadKind {
    /// Accumulate `0..5_000_000`.
    SumRange,
    /// Sum a 100_000-entry array 100 times.
    ArraySum,
    /// Compute `k! mod 1e9+7` for every `k < 5000`.
    Factorial,
    /// Modular Fibonacci recurrence, 1_000_000 steps.
    FibonacciMod,
    /// Naive recursive `fib(35)`.
    FibonacciRecursive,
    /// 5000 x 1000 counter increments.
    NestedLoops,
    /// Count primes below 50_000 by trial division.
    Primes,
    /// Count primes below 10_000 through `is_prime`.
    #[serde(rename = "primes_10k")]
    Primes10k,
}

impl WorkloadKind {
    /// Returns all workload kinds in reporting order.
    pub fn all() -> &'static [WorkloadKind] {
        &[
            WorkloadKind::SumRange,
            WorkloadKind::ArraySum,
            WorkloadKind::Factorial,
            WorkloadKind::FibonacciMod,
            WorkloadKind::FibonacciRecursive,
            WorkloadKind::NestedLoops,
            WorkloadKind::Primes,
            WorkloadKind::Primes10k,
        ]
    }

    /// Returns the machine-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            WorkloadKind::SumRange => "sum_range",
            WorkloadKind::ArraySum => "array_sum",
            WorkloadKind::Factorial => "factorial",
            WorkloadKind::FibonacciMod => "fibonacci_mod",
            WorkloadKind::FibonacciRecursive => "fibonacci_recursive",
            WorkloadKind::NestedLoops => "nested_loops",
            WorkloadKind::Primes => "primes",
            WorkloadKind::Primes10k => "primes_10k",
        }
    }

    /// The label line printed above the result.
    pub fn label(&self) -> &'static str {
        match self {
            WorkloadKind::SumRange => "Array sum:",
            WorkloadKind::ArraySum => "Array sum (100 passes):",
            WorkloadKind::Factorial => "Factorial iterations:",
            WorkloadKind::FibonacciMod => "Fibonacci result (mod 1e9+7):",
            WorkloadKind::FibonacciRecursive => "Fibonacci(35):",
            WorkloadKind::NestedLoops => "Nested loops result:",
            WorkloadKind::Primes => "Prime count:",
            WorkloadKind::Primes10k => "Prime count (below 10000):",
        }
    }

    /// Look up a workload by name.
    pub fn from_name(name: &str) -> IntBenchResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| IntBenchError::UnknownWorkload(name.to_string()))
    }

    /// Comma-separated list of every registered name.
    pub fn available() -> String {
        Self::all()
            .iter()
            .map(WorkloadKind::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The known result, when one is cheap to state without running the kernel.
    ///
    /// `None` for the modular Fibonacci workload, whose value is only
    /// checked for run-to-run agreement.
    pub fn expected(&self) -> Option<u64> {
        match self {
            WorkloadKind::SumRange => Some(SUM_RANGE_N * (SUM_RANGE_N - 1) / 2),
            WorkloadKind::ArraySum => {
                Some(ARRAY_SUM_PASSES * (ARRAY_SUM_SIZE * (ARRAY_SUM_SIZE - 1) / 2))
            }
            WorkloadKind::Factorial => Some(FACTORIAL_N),
            WorkloadKind::FibonacciMod => None,
            WorkloadKind::FibonacciRecursive => Some(9_227_465),
            WorkloadKind::NestedLoops => Some(NESTED_OUTER * NESTED_INNER),
            WorkloadKind::Primes => Some(5133),
            WorkloadKind::Primes10k => Some(1229),
        }
    }

    /// Run the kernel once with its registered constants.
    pub fn execute(&self) -> u64 {
        match self {
            WorkloadKind::SumRange => kernels::sum_range(SUM_RANGE_N),
            WorkloadKind::ArraySum => kernels::array_sum(ARRAY_SUM_SIZE, ARRAY_SUM_PASSES),
            WorkloadKind::Factorial => kernels::factorial_iterations(FACTORIAL_N, MODULUS),
            WorkloadKind::FibonacciMod => kernels::fibonacci_mod(FIBONACCI_MOD_N, MODULUS),
            WorkloadKind::FibonacciRecursive => kernels::fibonacci_recursive(FIBONACCI_RECURSIVE_N),
            WorkloadKind::NestedLoops => kernels::nested_loops(NESTED_OUTER, NESTED_INNER),
            WorkloadKind::Primes => kernels::count_primes(PRIMES_LIMIT),
            WorkloadKind::Primes10k => kernels::count_primes_is_prime(PRIMES_SMALL_LIMIT),
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkloadKind {
    type Err = IntBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// A workload together with how many times to run it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    /// Which benchmark.
    pub kind: WorkloadKind,
    /// Number of timed runs.
    pub runs: u32,
    /// Number of untimed warmup runs before the timed ones.
    pub warmup: u32,
}

impl Workload {
    /// Create a workload with the default run counts.
    pub fn from_kind(kind: WorkloadKind) -> Self {
        Self {
            kind,
            runs: DEFAULT_RUNS,
            warmup: DEFAULT_WARMUP_RUNS,
        }
    }

    /// Set the number of timed runs.
    pub fn with_runs(mut self, runs: u32) -> Self {
        self.runs = runs;
        self
    }

    /// Set the number of untimed warmup runs.
    pub fn with_warmup(mut self, warmup: u32) -> Self {
        self.warmup = warmup;
        self
    }
}
