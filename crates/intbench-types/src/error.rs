//! Error types for the intbench harness.
//!
//! Kernels are infallible. Only the harness layers (workload lookup,
//! config loading, result verification, report output) return
//! `IntBenchResult<T>`.

use thiserror::Error;

/// Unified error type for the intbench harness.
#[derive(Debug, Error)]
pub enum IntBenchError {
    /// No workload is registered under this name.
    #[error("Unknown workload: '{0}'")]
    UnknownWorkload(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Two runs of the same workload disagreed.
    #[error("Workload '{workload}' is not deterministic: first run gave {first}, a later run gave {other}")]
    NonDeterministic {
        workload: String,
        first: u64,
        other: u64,
    },

    /// A workload produced something other than its known result.
    #[error("Workload '{workload}' returned {actual}, expected {expected}")]
    ResultMismatch {
        workload: String,
        expected: u64,
        actual: u64,
    },
}

/// Convenience alias for `Result<T, IntBenchError>`.
pub type IntBenchResult<T> = Result<T, IntBenchError>;
