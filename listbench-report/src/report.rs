//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a backend reaches its implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Reference code called directly, no boundary crossing.
    InProcess,
    /// The mandatory compiled extension, invoked through a C ABI symbol.
    FfiNative,
    /// A wasm module executed inside the embedded VM host.
    EmbeddedVm,
    /// A shared library invoked through an explicit foreign signature.
    NativeLibrary,
}

impl BackendKind {
    /// Short label for table rendering.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::InProcess => "in-process",
            BackendKind::FfiNative => "ffi-native",
            BackendKind::EmbeddedVm => "embedded-vm",
            BackendKind::NativeLibrary => "native-library",
        }
    }
}

/// Outcome of measuring one backend.
///
/// The two arms are mutually exclusive by construction: a trial either
/// carries an average plus its raw per-repeat timings, or an error, never
/// both and never neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TrialOutcome {
    /// All repeats completed; timings in milliseconds.
    Measured {
        /// Cumulative elapsed time divided by the repeat count.
        average_ms: f64,
        /// Per-repeat wall times in measurement order, kept for diagnostics.
        repeats_ms: Vec<f64>,
    },
    /// Measurement aborted; partial timings are discarded.
    Failed {
        /// Adapter-level description of what went wrong.
        error: String,
    },
}

/// One backend's measurement for one suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialResult {
    /// Backend name as registered.
    pub backend: String,
    /// Execution mechanism.
    pub kind: BackendKind,
    /// Measurement or error.
    #[serde(flatten)]
    pub outcome: TrialOutcome,
}

impl TrialResult {
    /// Average time when the trial succeeded.
    pub fn average_ms(&self) -> Option<f64> {
        match &self.outcome {
            TrialOutcome::Measured { average_ms, .. } => Some(*average_ms),
            TrialOutcome::Failed { .. } => None,
        }
    }

    /// Error description when the trial failed.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            TrialOutcome::Measured { .. } => None,
            TrialOutcome::Failed { error } => Some(error),
        }
    }
}

/// Ranking direction for a suite's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Fastest relative to the baseline first (append suite).
    SpeedupDescending,
    /// Smallest absolute average first (insert suite).
    TimeAscending,
}

/// One rendered table row: a successful backend with its computed ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRow {
    /// Backend name.
    pub backend: String,
    /// Execution mechanism.
    pub kind: BackendKind,
    /// Average wall time in milliseconds.
    pub average_ms: f64,
    /// Baseline average divided by this row's average; `None` when the
    /// baseline itself failed to measure.
    pub ratio: Option<f64>,
    /// Whether this row is the designated baseline.
    pub is_baseline: bool,
}

/// Ranked results of one suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Suite identifier (workload id).
    pub suite: String,
    /// Iteration count each invocation received.
    pub iterations: u32,
    /// Back-to-back repeats per backend.
    pub repeats: u32,
    /// Designated baseline backend name.
    pub baseline: String,
    /// Ranking direction used for `rows`.
    pub sort: SortOrder,
    /// Successful backends in rank order.
    pub rows: Vec<RankedRow>,
    /// One line per excluded backend.
    pub warnings: Vec<String>,
    /// Raw trial data, including per-repeat timings and failures.
    pub trials: Vec<TrialResult>,
}

/// Metadata attached to a JSON report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    /// Crate version that produced the report.
    pub version: String,
    /// UTC timestamp of the run.
    pub timestamp: DateTime<Utc>,
}

/// A whole run: metadata plus every suite executed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Run metadata.
    pub meta: RunMeta,
    /// Suites in execution order.
    pub suites: Vec<SuiteReport>,
}

/// Rank trials into a suite report.
///
/// Only measured trials become rows. Ratios are relative to the designated
/// baseline's average; the baseline's own ratio is exactly 1.0. Sorting is
/// stable, so ties keep discovery order and the output is deterministic
/// run-to-run for identical timings. Failed trials turn into warning lines.
pub fn build_suite_report(
    suite: &str,
    iterations: u32,
    repeats: u32,
    baseline: &str,
    sort: SortOrder,
    trials: Vec<TrialResult>,
) -> SuiteReport {
    let baseline_ms = trials
        .iter()
        .find(|t| t.backend == baseline)
        .and_then(TrialResult::average_ms);

    let mut rows: Vec<RankedRow> = trials
        .iter()
        .filter_map(|trial| {
            let average_ms = trial.average_ms()?;
            Some(RankedRow {
                backend: trial.backend.clone(),
                kind: trial.kind,
                average_ms,
                ratio: baseline_ms.map(|b| b / average_ms),
                is_baseline: trial.backend == baseline,
            })
        })
        .collect();

    match sort {
        // A missing baseline leaves no ratios; fall back to absolute time
        // so the table stays ordered.
        SortOrder::SpeedupDescending if baseline_ms.is_some() => {
            rows.sort_by(|a, b| {
                b.ratio
                    .partial_cmp(&a.ratio)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        _ => {
            rows.sort_by(|a, b| {
                a.average_ms
                    .partial_cmp(&b.average_ms)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }

    let mut warnings: Vec<String> = trials
        .iter()
        .filter_map(|t| t.error().map(|e| format!("{}: {}", t.backend, e)))
        .collect();
    if baseline_ms.is_none() {
        warnings.push(format!(
            "baseline `{baseline}` has no measurement; ratios unavailable"
        ));
    }

    SuiteReport {
        suite: suite.to_string(),
        iterations,
        repeats,
        baseline: baseline.to_string(),
        sort,
        rows,
        warnings,
        trials,
    }
}
