//! Pluggable event sinks.

use std::sync::{Arc, Mutex, PoisonError};

use crate::events::{BenchEvent, EventKind};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &BenchEvent);

    /// Called once when the suite ends.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events into a shared `Vec`.
///
/// The sink keeps a handle to the same buffer as any clone, so a clone
/// kept outside the bus can inspect what was delivered.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<BenchEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event received so far.
    pub fn events(&self) -> Vec<BenchEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of events received so far.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no events have been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &BenchEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Forwards events to the `tracing` log.
///
/// Per-run events are logged at `debug`, verification and suite summaries
/// at `info`.
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &BenchEvent) {
        match &event.kind {
            EventKind::RunBegin { run, warmup } => {
                tracing::debug!(workload = %event.workload, run, warmup, "run_begin");
            }
            EventKind::RunEnd {
                run,
                wall_time,
                result,
            } => {
                tracing::debug!(workload = %event.workload, run, wall_time, result, "run_end");
            }
            EventKind::Verified { result, checked } => {
                tracing::info!(workload = %event.workload, result, checked, "verified");
            }
            EventKind::SuiteEnd {
                workloads,
                total_wall_time,
            } => {
                tracing::info!(workloads, total_wall_time, "suite_end");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
