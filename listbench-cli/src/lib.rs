//! ListBench CLI Library
//!
//! Wires the pieces together in the order the suite demands: resolve the
//! mandatory extension (fatal when missing), discover each suite's optional
//! artifacts (degraded when missing), drive the timing engine, rank, print.
//!
//! Exit policy: nonzero only when the mandatory extension cannot be loaded.
//! Skipped optional backends and failed measurements are warnings.

pub mod config;
pub mod executor;
pub mod suite;

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use listbench_backends::{KernelModule, Registry};
use listbench_report::{build_suite_report, to_json, RunMeta, RunReport, SuiteReport};

use crate::config::BenchConfig;
use crate::suite::{append_suite, insert_suite, SuiteSpec};

/// Which suite(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SuiteArg {
    /// Sequential append-and-sum.
    Append,
    /// Randomized positional insertion.
    Insert,
    /// Both, append first.
    All,
}

/// Output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned terminal tables.
    Human,
    /// One JSON document for the whole run.
    Json,
}

/// ListBench CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "listbench")]
#[command(version, about = "Cross-backend list workload benchmark")]
pub struct Cli {
    /// Suite to run; defaults to the full fixed sequence.
    #[arg(value_enum, default_value_t = SuiteArg::All)]
    pub suite: SuiteArg,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Artifact directory (overrides configuration).
    #[arg(long)]
    pub artifacts: Option<PathBuf>,

    /// Explicit configuration file instead of discovery.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose diagnostics.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the selected suites. An error return means the mandatory extension
/// was unusable; everything else degrades.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => BenchConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BenchConfig::discover().unwrap_or_default(),
    };

    let artifact_dir = cli
        .artifacts
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.artifacts.directory));

    // Mandatory dependency, resolved before any measurement.
    let kernel = KernelModule::load(&artifact_dir).map_err(|e| {
        anyhow::anyhow!(
            "{e}\nthe kernel extension is required; build it with \
             `cargo build -p listbench-kernels --release`"
        )
    })?;
    let kernel = Rc::new(kernel);
    tracing::info!(path = %kernel.path().display(), "kernel extension loaded");

    let specs: Vec<SuiteSpec> = match cli.suite {
        SuiteArg::Append => vec![append_suite().with_overrides(&config.append)],
        SuiteArg::Insert => vec![insert_suite().with_overrides(&config.insert)],
        SuiteArg::All => vec![
            append_suite().with_overrides(&config.append),
            insert_suite().with_overrides(&config.insert),
        ],
    };

    let mut suites: Vec<SuiteReport> = Vec::with_capacity(specs.len());
    for spec in &specs {
        let registry = Registry::discover(&spec.backends, &artifact_dir, Some(&kernel));
        for skipped in registry.skipped() {
            eprintln!(
                "warning: backend `{}` skipped: {}",
                skipped.name, skipped.reason
            );
        }

        let trials = executor::run_suite(spec, &registry);
        suites.push(build_suite_report(
            spec.id(),
            spec.iterations,
            spec.repeats,
            spec.baseline,
            spec.sort,
            trials,
        ));
    }

    match cli.format {
        OutputFormat::Human => {
            for report in &suites {
                println!("{}", listbench_report::format_suite(report));
            }
        }
        OutputFormat::Json => {
            let run = RunReport {
                meta: RunMeta {
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    timestamp: chrono::Utc::now(),
                },
                suites,
            };
            println!("{}", to_json(&run).context("failed to serialize report")?);
        }
    }

    Ok(())
}
