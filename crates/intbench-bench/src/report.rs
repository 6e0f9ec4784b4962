//! Report writers: the two-line result output and suite reports.

use std::io::Write;

use intbench_types::{IntBenchError, IntBenchResult};

use crate::config::OutputFormat;
use crate::metrics::BenchmarkMetrics;
use crate::workloads::WorkloadKind;

/// Run `kind` once and write its label line followed by its result line.
pub fn write_result<W: Write>(kind: WorkloadKind, out: &mut W) -> IntBenchResult<u64> {
    let result = kind.execute();
    writeln!(out, "{}", kind.label())?;
    writeln!(out, "{result}")?;
    Ok(result)
}

/// Render suite metrics in the requested format.
pub fn render(metrics: &[BenchmarkMetrics], format: OutputFormat) -> IntBenchResult<String> {
    match format {
        OutputFormat::Csv => Ok(BenchmarkMetrics::to_csv(metrics)),
        OutputFormat::Json => serde_json::to_string_pretty(metrics)
            .map_err(|e| IntBenchError::Serialization(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_line_output() {
        let mut buf = Vec::new();
        let result = write_result(WorkloadKind::NestedLoops, &mut buf).unwrap();
        assert_eq!(result, 5_000_000);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Nested loops result:\n5000000\n");
    }
}
