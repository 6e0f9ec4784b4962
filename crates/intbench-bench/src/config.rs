//! Suite configuration.
//!
//! Controls how the harness runs (run counts, selection, output), never
//! the workload constants themselves.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use intbench_types::constants::{DEFAULT_RUNS, DEFAULT_WARMUP_RUNS};
use intbench_types::{IntBenchError, IntBenchResult};

use crate::workloads::WorkloadKind;

/// Report format for suite results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = IntBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(IntBenchError::InvalidConfig(format!(
                "unknown output format '{other}' (expected csv or json)"
            ))),
        }
    }
}

/// Configuration for a benchmark suite run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuiteConfig {
    /// Timed runs per workload. Must be at least 1.
    pub runs: u32,

    /// Untimed warmup runs per workload.
    pub warmup: u32,

    /// Workload names to run, in order. `["all"]` selects every workload.
    pub workloads: Vec<String>,

    /// Report format.
    pub format: OutputFormat,

    /// Report file. `None` writes to stdout.
    pub output: Option<PathBuf>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            warmup: DEFAULT_WARMUP_RUNS,
            workloads: vec!["all".to_string()],
            format: OutputFormat::Csv,
            output: None,
        }
    }
}

impl SuiteConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> IntBenchResult<Self> {
        toml::from_str(content).map_err(|e| IntBenchError::Serialization(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> IntBenchResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded suite config");
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> IntBenchResult<String> {
        toml::to_string(self).map_err(|e| IntBenchError::Serialization(e.to_string()))
    }

    /// Check run counts and workload names.
    pub fn validate(&self) -> IntBenchResult<()> {
        if self.runs == 0 {
            return Err(IntBenchError::InvalidConfig("runs must be at least 1".into()));
        }
        if self.workloads.is_empty() {
            return Err(IntBenchError::InvalidConfig("no workloads selected".into()));
        }
        if self.workloads.len() > 1 && self.workloads.iter().any(|w| w == "all") {
            return Err(IntBenchError::InvalidConfig(
                "'all' cannot be combined with other workload names".into(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.workloads {
            if name != "all" {
                WorkloadKind::from_name(name)?;
            }
            if !seen.insert(name.as_str()) {
                return Err(IntBenchError::InvalidConfig(format!(
                    "workload '{name}' listed more than once"
                )));
            }
        }
        Ok(())
    }

    /// Resolve the selected workload names.
    pub fn selected(&self) -> IntBenchResult<Vec<WorkloadKind>> {
        if self.workloads.iter().any(|w| w == "all") {
            return Ok(WorkloadKind::all().to_vec());
        }
        self.workloads
            .iter()
            .map(|name| WorkloadKind::from_name(name))
            .collect()
    }
}
