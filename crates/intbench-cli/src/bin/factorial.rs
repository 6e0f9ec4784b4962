use std::process::ExitCode;

use intbench_bench::WorkloadKind;

fn main() -> ExitCode {
    intbench_cli::run_standalone(WorkloadKind::Factorial)
}
