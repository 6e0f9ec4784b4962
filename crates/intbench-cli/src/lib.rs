//! Shared entry-point helpers for the `intbench` CLI and the standalone
//! per-workload executables.

use std::io::Write;
use std::process::ExitCode;

use intbench_bench::report;
use intbench_bench::WorkloadKind;
use intbench_types::IntBenchResult;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is reserved for results.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second install (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Body of a standalone executable: print the label and result of one workload.
pub fn run_standalone(kind: WorkloadKind) -> ExitCode {
    init_logging();
    match print_result(kind) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_result(kind: WorkloadKind) -> IntBenchResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = report::write_result(kind, &mut out)?;
    out.flush()?;
    tracing::debug!(workload = kind.name(), result, "printed result");
    Ok(())
}
