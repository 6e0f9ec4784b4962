//! intbench CLI: run, list and time the integer micro-benchmarks.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "intbench")]
#[command(version, about = "Deterministic integer micro-benchmarks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one workload and print its label and result.
    Run {
        /// Workload name (see `intbench list`).
        workload: String,
    },

    /// List the registered workloads.
    List,

    /// Time a set of workloads.
    Bench {
        /// Workload to run, or `all`. Overrides the config selection.
        #[arg(short, long)]
        workload: Option<String>,

        /// Timed runs per workload.
        #[arg(short, long)]
        runs: Option<u32>,

        /// Untimed warmup runs per workload.
        #[arg(long)]
        warmup: Option<u32>,

        /// Suite config file (TOML).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report format (csv or json).
        #[arg(short, long)]
        format: Option<String>,

        /// Report file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a suite config file.
    Validate {
        /// Path to the TOML config.
        path: PathBuf,
    },
}

fn main() {
    intbench_cli::init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { workload } => commands::run(&workload),
        Commands::List => commands::list(),
        Commands::Bench {
            workload,
            runs,
            warmup,
            config,
            format,
            output,
        } => commands::bench(commands::BenchArgs {
            workload,
            runs,
            warmup,
            config,
            format,
            output,
        }),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
