//! CLI command implementations.

use std::path::{Path, PathBuf};

use intbench_bench::report;
use intbench_bench::{BenchmarkRunner, OutputFormat, SuiteConfig, WorkloadKind};
use intbench_telemetry::{EventBus, TracingSink};
use intbench_types::IntBenchResult;

/// `bench` options as given on the command line.
pub struct BenchArgs {
    pub workload: Option<String>,
    pub runs: Option<u32>,
    pub warmup: Option<u32>,
    pub config: Option<PathBuf>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
}

/// Print one workload's label and result.
pub fn run(name: &str) -> IntBenchResult<()> {
    let kind = WorkloadKind::from_name(name)?;
    let stdout = std::io::stdout();
    report::write_result(kind, &mut stdout.lock())?;
    Ok(())
}

/// Print every registered workload.
pub fn list() -> IntBenchResult<()> {
    println!("{:<22} {:<32} {}", "NAME", "LABEL", "EXPECTED");
    for &kind in WorkloadKind::all() {
        let expected = kind
            .expected()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<22} {:<32} {}", kind.name(), kind.label(), expected);
    }
    Ok(())
}

/// Time the selected workloads and write a report.
pub fn bench(args: BenchArgs) -> IntBenchResult<()> {
    let config = resolve_config(args)?;
    config.validate()?;

    let kinds = config.selected()?;
    println!("intbench suite");
    println!("══════════════");
    println!(
        "{} workload(s), {} run(s) each, {} warmup",
        kinds.len(),
        config.runs,
        config.warmup
    );
    println!();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    let all_metrics = BenchmarkRunner::run_all(&config, &mut bus)?;
    for m in &all_metrics {
        println!("{}", m.workload);
        println!("  Result:    {}{}", m.result, if m.verified { " (verified)" } else { "" });
        println!("  Avg run:   {:.3}ms", m.avg_run_time * 1000.0);
        println!("  Min/Max:   {:.3}ms / {:.3}ms", m.min_run_time * 1000.0, m.max_run_time * 1000.0);
        println!();
    }

    let rendered = report::render(&all_metrics, config.format)?;
    match &config.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("Results written to: {}", path.display());
        }
        None => {
            println!("{} output:", config.format.to_string().to_uppercase());
            println!("{rendered}");
        }
    }
    Ok(())
}

/// Check a suite config file.
pub fn validate(path: &Path) -> IntBenchResult<()> {
    println!("Validating config: {}", path.display());
    let config = SuiteConfig::load(path)?;
    config.validate()?;
    let names: Vec<&str> = config.selected()?.iter().map(|k| k.name()).collect();
    println!(
        "✅ Config is valid ({} run(s), workloads: {}).",
        config.runs,
        names.join(", ")
    );
    Ok(())
}

/// Config file (or defaults) with command-line flags layered on top.
fn resolve_config(args: BenchArgs) -> IntBenchResult<SuiteConfig> {
    let mut config = match &args.config {
        Some(path) => SuiteConfig::load(path)?,
        None => SuiteConfig::default(),
    };
    if let Some(workload) = args.workload {
        config.workloads = vec![workload];
    }
    if let Some(runs) = args.runs {
        config.runs = runs;
    }
    if let Some(warmup) = args.warmup {
        config.warmup = warmup;
    }
    if let Some(format) = args.format {
        config.format = format.parse::<OutputFormat>()?;
    }
    if args.output.is_some() {
        config.output = args.output;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_args() -> BenchArgs {
        BenchArgs {
            workload: None,
            runs: None,
            warmup: None,
            config: None,
            format: None,
            output: None,
        }
    }

    #[test]
    fn flags_override_defaults() {
        let config = resolve_config(BenchArgs {
            workload: Some("primes".into()),
            runs: Some(2),
            format: Some("json".into()),
            ..no_args()
        })
        .unwrap();
        assert_eq!(config.workloads, vec!["primes".to_string()]);
        assert_eq!(config.runs, 2);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.warmup, SuiteConfig::default().warmup);
    }

    #[test]
    fn bad_format_flag_is_rejected() {
        let err = resolve_config(BenchArgs {
            format: Some("yaml".into()),
            ..no_args()
        });
        assert!(err.is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("intbench-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "runs = 9\nworkloads = [\"factorial\"]\n").unwrap();
        let config = resolve_config(BenchArgs {
            config: Some(path.clone()),
            runs: Some(1),
            ..no_args()
        })
        .unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.runs, 1);
        assert_eq!(config.workloads, vec!["factorial".to_string()]);
    }

    #[test]
    fn unknown_workload_run_fails() {
        assert!(run("nope").is_err());
    }
}
