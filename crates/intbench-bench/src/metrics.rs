//! Benchmark metrics: data collected during a workload's runs.

use serde::{Deserialize, Serialize};

/// Metrics collected from a workload's timed runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Workload name.
    pub workload: String,
    /// Label line printed with the result.
    pub label: String,
    /// Value every run produced.
    pub result: u64,
    /// Number of timed runs.
    pub runs: u32,
    /// Sum of timed run durations (seconds).
    pub total_wall_time: f64,
    /// Average time per run (seconds).
    pub avg_run_time: f64,
    /// Fastest run (seconds).
    pub min_run_time: f64,
    /// Slowest run (seconds).
    pub max_run_time: f64,
    /// Whether `result` was checked against a known value.
    pub verified: bool,
}

impl BenchmarkMetrics {
    /// CSV header line.
    pub fn to_csv_header() -> String {
        "workload,result,runs,total_wall_time_s,avg_run_ms,min_run_ms,max_run_ms,verified"
            .to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{:.6},{:.4},{:.4},{:.4},{}",
            self.workload,
            self.result,
            self.runs,
            self.total_wall_time,
            self.avg_run_time * 1000.0,
            self.min_run_time * 1000.0,
            self.max_run_time * 1000.0,
            self.verified,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
