//! # intbench-bench
//!
//! Harness for the fixed-workload integer benchmarks.
//!
//! Provides the workload registry, a runner that times and verifies
//! runs, metric collection with CSV/JSON export, and the TOML suite
//! config.

pub mod config;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod workloads;

pub use config::{OutputFormat, SuiteConfig};
pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use workloads::{Workload, WorkloadKind};
