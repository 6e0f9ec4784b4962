//! Benchmark event types.
//!
//! Events are small value types tagged with the workload they belong to.

use serde::{Deserialize, Serialize};

/// An event emitted by the benchmark runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchEvent {
    /// Workload name, or `"suite"` for suite-level events.
    pub workload: String,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A run is about to start.
    RunBegin {
        /// Run index (0-based, counted separately for warmup and timed runs).
        run: u32,
        /// Whether this is an untimed warmup run.
        warmup: bool,
    },

    /// A timed run completed.
    RunEnd {
        /// Run index (0-based).
        run: u32,
        /// Wall-clock time for the run (seconds).
        wall_time: f64,
        /// Value produced by the workload.
        result: u64,
    },

    /// All runs agreed, and matched the known value when there is one.
    Verified {
        /// The agreed result.
        result: u64,
        /// Whether a known expected value was checked.
        checked: bool,
    },

    /// Every selected workload finished.
    SuiteEnd {
        /// Number of workloads run.
        workloads: usize,
        /// Total wall-clock time across the suite (seconds).
        total_wall_time: f64,
    },
}

impl BenchEvent {
    /// Creates a new event for the given workload.
    pub fn new(workload: impl Into<String>, kind: EventKind) -> Self {
        Self {
            workload: workload.into(),
            kind,
        }
    }
}
