//! Benchmark runner: executes workloads, times them and verifies their results.

use std::hint::black_box;
use std::time::Instant;

use intbench_telemetry::{BenchEvent, EventBus, EventKind};
use intbench_types::{IntBenchError, IntBenchResult};

use crate::config::SuiteConfig;
use crate::metrics::BenchmarkMetrics;
use crate::workloads::{Workload, WorkloadKind};

/// Runs workloads and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run one workload: `warmup` untimed runs, then `runs` timed runs.
    ///
    /// Fails if any two runs disagree, or if the workload has a known
    /// result and the runs produced something else. Queued events are
    /// flushed to the sinks whether or not the workload succeeds.
    pub fn run(workload: &Workload, bus: &mut EventBus) -> IntBenchResult<BenchmarkMetrics> {
        let kind = workload.kind;
        let outcome = Self::run_with(workload, bus, || kind.execute());
        bus.flush();
        outcome
    }

    /// Body of [`run`](Self::run) with the kernel call supplied by the caller.
    fn run_with<F>(
        workload: &Workload,
        bus: &mut EventBus,
        mut execute: F,
    ) -> IntBenchResult<BenchmarkMetrics>
    where
        F: FnMut() -> u64,
    {
        let kind = workload.kind;
        let name = kind.name();
        if workload.runs == 0 {
            return Err(IntBenchError::InvalidConfig(format!(
                "workload '{name}' needs at least one timed run"
            )));
        }

        tracing::debug!(workload = name, runs = workload.runs, warmup = workload.warmup, "running workload");

        let mut agreement = Agreement::new(name);

        for run in 0..workload.warmup {
            bus.emit(BenchEvent::new(name, EventKind::RunBegin { run, warmup: true }));
            agreement.check(black_box(execute()))?;
        }

        let mut run_times: Vec<f64> = Vec::with_capacity(workload.runs as usize);
        for run in 0..workload.runs {
            bus.emit(BenchEvent::new(name, EventKind::RunBegin { run, warmup: false }));
            let start = Instant::now();
            let result = black_box(execute());
            let wall_time = start.elapsed().as_secs_f64();
            bus.emit(BenchEvent::new(name, EventKind::RunEnd { run, wall_time, result }));
            run_times.push(wall_time);
            agreement.check(result)?;
        }

        let result = agreement.value().unwrap_or_default();
        let verified = Self::verify(kind, result)?;
        bus.emit(BenchEvent::new(name, EventKind::Verified { result, checked: verified }));

        let total_wall_time: f64 = run_times.iter().sum();
        let avg_run_time = total_wall_time / run_times.len() as f64;
        let min_run_time = run_times.iter().copied().fold(f64::MAX, f64::min);
        let max_run_time = run_times.iter().copied().fold(0.0, f64::max);

        Ok(BenchmarkMetrics {
            workload: name.to_string(),
            label: kind.label().to_string(),
            result,
            runs: workload.runs,
            total_wall_time,
            avg_run_time,
            min_run_time,
            max_run_time,
            verified,
        })
    }

    /// Run every workload the config selects, in order.
    pub fn run_all(config: &SuiteConfig, bus: &mut EventBus) -> IntBenchResult<Vec<BenchmarkMetrics>> {
        config.validate()?;
        let mut results = Vec::new();
        for kind in config.selected()? {
            let workload = Workload::from_kind(kind)
                .with_runs(config.runs)
                .with_warmup(config.warmup);
            results.push(Self::run(&workload, bus)?);
        }

        let total_wall_time = results.iter().map(|m| m.total_wall_time).sum();
        bus.emit(BenchEvent::new(
            "suite",
            EventKind::SuiteEnd {
                workloads: results.len(),
                total_wall_time,
            },
        ));
        bus.finalize();
        Ok(results)
    }

    /// Returns whether a known value was checked.
    fn verify(kind: WorkloadKind, actual: u64) -> IntBenchResult<bool> {
        match kind.expected() {
            Some(expected) if expected != actual => Err(IntBenchError::ResultMismatch {
                workload: kind.name().to_string(),
                expected,
                actual,
            }),
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }
}

/// Tracks the first result of a workload and rejects any run that differs.
struct Agreement {
    workload: &'static str,
    first: Option<u64>,
}

impl Agreement {
    fn new(workload: &'static str) -> Self {
        Self {
            workload,
            first: None,
        }
    }

    fn check(&mut self, value: u64) -> IntBenchResult<()> {
        match self.first {
            None => {
                self.first = Some(value);
                Ok(())
            }
            Some(first) if first == value => Ok(()),
            Some(first) => Err(IntBenchError::NonDeterministic {
                workload: self.workload.to_string(),
                first,
                other: value,
            }),
        }
    }

    fn value(&self) -> Option<u64> {
        self.first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use intbench_telemetry::VecSink;

    fn bus_with_sink() -> (EventBus, VecSink) {
        let mut bus = EventBus::new();
        let sink = VecSink::new();
        bus.add_sink(Box::new(sink.clone()));
        (bus, sink)
    }

    // ─── Verification ─────────────────────────────────────────

    #[test]
    fn verify_rejects_wrong_known_value() {
        let err = BenchmarkRunner::verify(WorkloadKind::Primes, 5132).unwrap_err();
        assert!(matches!(
            err,
            IntBenchError::ResultMismatch { expected: 5133, actual: 5132, .. }
        ));
    }

    #[test]
    fn verify_accepts_known_value() {
        assert!(BenchmarkRunner::verify(WorkloadKind::Primes, 5133).unwrap());
    }

    #[test]
    fn verify_skips_workload_without_known_value() {
        assert!(!BenchmarkRunner::verify(WorkloadKind::FibonacciMod, 12345).unwrap());
    }

    // ─── Agreement ────────────────────────────────────────────

    #[test]
    fn agreement_accepts_repeats() {
        let mut agreement = Agreement::new("primes");
        assert_eq!(agreement.value(), None);
        agreement.check(7).unwrap();
        agreement.check(7).unwrap();
        assert_eq!(agreement.value(), Some(7));
    }

    #[test]
    fn agreement_rejects_divergent_run() {
        let mut agreement = Agreement::new("primes");
        agreement.check(7).unwrap();
        let err = agreement.check(8).unwrap_err();
        assert!(matches!(
            err,
            IntBenchError::NonDeterministic { first: 7, other: 8, ref workload } if workload == "primes"
        ));
    }

    // ─── Failing Runs ─────────────────────────────────────────

    #[test]
    fn divergent_runs_fail_and_flush_events() {
        let (mut bus, sink) = bus_with_sink();
        let workload = Workload::from_kind(WorkloadKind::FibonacciMod)
            .with_runs(3)
            .with_warmup(0);

        let mut next = 0u64;
        let outcome = BenchmarkRunner::run_with(&workload, &mut bus, || {
            next += 1;
            next
        });
        assert!(matches!(outcome, Err(IntBenchError::NonDeterministic { first: 1, other: 2, .. })));
        assert!(sink.is_empty()); // Not yet flushed by run_with

        bus.flush();
        // (begin, end) for the run that matched and the one that did not
        assert_eq!(sink.len(), 4);
        assert!(!sink
            .events()
            .iter()
            .any(|e| matches!(e.kind, EventKind::Verified { .. })));
    }

    #[test]
    fn wrong_value_fails_with_mismatch() {
        let (mut bus, _sink) = bus_with_sink();
        let workload = Workload::from_kind(WorkloadKind::Primes).with_runs(2).with_warmup(1);
        let outcome = BenchmarkRunner::run_with(&workload, &mut bus, || 5132);
        assert!(matches!(
            outcome,
            Err(IntBenchError::ResultMismatch { expected: 5133, actual: 5132, .. })
        ));
    }

    #[test]
    fn failed_workload_events_do_not_leak_into_next() {
        let (mut bus, sink) = bus_with_sink();
        let failing = Workload::from_kind(WorkloadKind::Primes).with_runs(1).with_warmup(0);

        // Mirror `run`: flush after the body whatever the outcome.
        assert!(BenchmarkRunner::run_with(&failing, &mut bus, || 0).is_err());
        bus.flush();
        let after_failure = sink.len();
        assert_eq!(after_failure, 2);

        let next = Workload::from_kind(WorkloadKind::NestedLoops).with_runs(1).with_warmup(0);
        BenchmarkRunner::run(&next, &mut bus).unwrap();
        let events = sink.events();
        assert!(events[after_failure..]
            .iter()
            .all(|e| e.workload == "nested_loops"));
    }
}
