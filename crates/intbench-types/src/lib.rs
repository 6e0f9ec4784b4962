//! # intbench-types
//!
//! Shared error types and fixed workload constants for the intbench
//! micro-benchmark harness.
//!
//! This crate has zero benchmark logic. It defines the vocabulary
//! that the kernel, harness and CLI crates share.

pub mod constants;
pub mod error;

pub use error::{IntBenchError, IntBenchResult};
