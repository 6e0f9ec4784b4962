//! Integration tests for the intbench executables.

use std::process::Command;

fn stdout_of(exe: &str, args: &[&str]) -> (bool, String) {
    let output = Command::new(exe)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    (output.status.success(), String::from_utf8(output.stdout).unwrap())
}

// ─── Standalone Executables ───────────────────────────────────

#[test]
fn nested_loops_binary_prints_two_lines() {
    let (ok, out) = stdout_of(env!("CARGO_BIN_EXE_nested_loops"), &[]);
    assert!(ok);
    assert_eq!(out, "Nested loops result:\n5000000\n");
}

#[test]
fn primes_binaries_keep_both_variants() {
    let (ok, out) = stdout_of(env!("CARGO_BIN_EXE_primes_10k"), &[]);
    assert!(ok);
    assert_eq!(out, "Prime count (below 10000):\n1229\n");

    let (ok, out) = stdout_of(env!("CARGO_BIN_EXE_primes"), &[]);
    assert!(ok);
    assert_eq!(out, "Prime count:\n5133\n");
}

#[test]
fn factorial_binary() {
    let (ok, out) = stdout_of(env!("CARGO_BIN_EXE_factorial"), &[]);
    assert!(ok);
    assert_eq!(out.lines().collect::<Vec<_>>(), vec!["Factorial iterations:", "5000"]);
}

// ─── intbench CLI ─────────────────────────────────────────────

#[test]
fn cli_run_matches_standalone() {
    let (ok, via_cli) = stdout_of(env!("CARGO_BIN_EXE_intbench"), &["run", "sum_range"]);
    assert!(ok);
    let (_, standalone) = stdout_of(env!("CARGO_BIN_EXE_sum_range"), &[]);
    assert_eq!(via_cli, standalone);
    assert_eq!(via_cli, "Array sum:\n12499997500000\n");
}

#[test]
fn cli_unknown_workload_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_intbench"))
        .args(["run", "mandelbrot"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown workload"));
}

#[test]
fn cli_list_names_every_workload() {
    let (ok, out) = stdout_of(env!("CARGO_BIN_EXE_intbench"), &["list"]);
    assert!(ok);
    for name in ["sum_range", "array_sum", "fibonacci_recursive", "primes_10k"] {
        assert!(out.contains(name), "missing {name}");
    }
}

#[test]
fn cli_bench_json_report() {
    let path = std::env::temp_dir().join(format!("intbench-report-{}.json", std::process::id()));
    let (ok, _) = stdout_of(
        env!("CARGO_BIN_EXE_intbench"),
        &[
            "bench",
            "--workload",
            "nested_loops",
            "--runs",
            "2",
            "--format",
            "json",
            "--output",
            path.to_str().unwrap(),
        ],
    );
    assert!(ok);
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(text.contains("\"workload\": \"nested_loops\""));
    assert!(text.contains("\"result\": 5000000"));
}

#[test]
fn cli_validates_example_config() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../intbench.toml");
    let (ok, out) = stdout_of(env!("CARGO_BIN_EXE_intbench"), &["validate", path]);
    assert!(ok);
    assert!(out.contains("Config is valid"));
}
