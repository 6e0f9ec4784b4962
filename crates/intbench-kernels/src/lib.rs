//! # intbench-kernels
//!
//! The benchmark routines themselves: pure integer loops with no input,
//! no I/O and no shared state.
//!
//! Every accumulator is `u64`. Modular workloads reduce after each
//! multiplication or addition, so no routine can overflow for a
//! modulus at or below 2^31.

pub mod factorial;
pub mod fibonacci;
pub mod nested;
pub mod primes;
pub mod summation;

pub use factorial::{factorial_iterations, factorial_mod};
pub use fibonacci::{fibonacci_mod, fibonacci_recursive};
pub use nested::nested_loops;
pub use primes::{count_primes, count_primes_is_prime, is_prime};
pub use summation::{array_sum, sum_range};
