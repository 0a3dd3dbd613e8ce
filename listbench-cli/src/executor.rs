//! Timing Engine
//!
//! Backends are measured one at a time, strictly sequentially, with a
//! monotonic clock. Each backend runs the suite's workload `repeats` times
//! back-to-back; a failure during any repeat aborts that backend's
//! measurement (partial timings are discarded) and never the suite.
//! Returned checksums are verified against the workload's expected value:
//! a backend that is fast but wrong is a failure, not a winner.

use std::hint::black_box;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use listbench_backends::{Backend, BackendError, Registry};
use listbench_report::{TrialOutcome, TrialResult};

use crate::suite::SuiteSpec;

/// Measure every available backend in discovery order.
pub fn run_suite(suite: &SuiteSpec, registry: &Registry) -> Vec<TrialResult> {
    let pb = ProgressBar::new(registry.backends().len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut trials = Vec::with_capacity(registry.backends().len());
    for backend in registry.backends() {
        pb.set_message(backend.name().to_string());
        trials.push(measure_backend(suite, backend));
        pb.inc(1);
    }
    pb.finish_and_clear();
    trials
}

/// Run one backend through the full repeat loop.
fn measure_backend(suite: &SuiteSpec, backend: &Backend) -> TrialResult {
    let expected = suite.workload.expected_checksum(suite.iterations);
    let mut repeats_ms = Vec::with_capacity(suite.repeats as usize);
    let mut total = Duration::ZERO;

    for _ in 0..suite.repeats {
        let start = Instant::now();
        let outcome = backend.invoke(suite.iterations);
        let elapsed = start.elapsed();

        match outcome {
            Ok(checksum) => {
                if let Some(actual) = checksum {
                    if actual != expected {
                        return failed(
                            backend,
                            BackendError::ChecksumMismatch { expected, actual },
                        );
                    }
                }
                black_box(checksum);
                total += elapsed;
                repeats_ms.push(elapsed.as_secs_f64() * 1000.0);
            }
            Err(error) => return failed(backend, error),
        }
    }

    if total.is_zero() {
        // A clock that never advanced is a measurement failure, not an
        // infinitely fast backend.
        return failed(backend, BackendError::ZeroElapsed);
    }

    let average_ms = total.as_secs_f64() * 1000.0 / f64::from(suite.repeats.max(1));
    tracing::debug!(
        backend = backend.name(),
        average_ms,
        repeats = suite.repeats,
        "measured"
    );
    TrialResult {
        backend: backend.name().to_string(),
        kind: backend.kind(),
        outcome: TrialOutcome::Measured {
            average_ms,
            repeats_ms,
        },
    }
}

fn failed(backend: &Backend, error: BackendError) -> TrialResult {
    tracing::warn!(backend = backend.name(), %error, "measurement aborted");
    TrialResult {
        backend: backend.name().to_string(),
        kind: backend.kind(),
        outcome: TrialOutcome::Failed {
            error: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use listbench_backends::BackendSpec;
    use listbench_core::{linked_append, vec_insert, Workload};
    use listbench_report::SortOrder;

    use super::*;

    fn tiny_suite(backends: Vec<BackendSpec>, workload: Workload) -> SuiteSpec {
        SuiteSpec {
            workload,
            iterations: 64,
            repeats: 3,
            sort: SortOrder::SpeedupDescending,
            baseline: "linked-list",
            backends,
        }
    }

    fn wrong_checksum(_n: u32) -> i64 {
        12345
    }

    fn panicking(_n: u32) -> i64 {
        panic!("backend blew up")
    }

    #[test]
    fn test_measured_backend_has_all_repeats() {
        let dir = tempfile::tempdir().unwrap();
        let suite = tiny_suite(
            vec![BackendSpec::InProcess {
                name: "linked-list",
                run: linked_append,
            }],
            Workload::SequentialBuildAndSum,
        );
        let registry = Registry::discover(&suite.backends, dir.path(), None);
        let trials = run_suite(&suite, &registry);

        assert_eq!(trials.len(), 1);
        match &trials[0].outcome {
            TrialOutcome::Measured {
                average_ms,
                repeats_ms,
            } => {
                assert_eq!(repeats_ms.len(), 3);
                assert!(*average_ms > 0.0);
            }
            other => panic!("expected measurement, got {other:?}"),
        }
    }

    #[test]
    fn test_checksum_mismatch_fails_the_trial() {
        let dir = tempfile::tempdir().unwrap();
        let suite = tiny_suite(
            vec![BackendSpec::InProcess {
                name: "liar",
                run: wrong_checksum,
            }],
            Workload::SequentialBuildAndSum,
        );
        let registry = Registry::discover(&suite.backends, dir.path(), None);
        let trials = run_suite(&suite, &registry);

        assert!(trials[0].error().unwrap().contains("checksum mismatch"));
    }

    #[test]
    fn test_one_failure_never_aborts_the_suite() {
        let dir = tempfile::tempdir().unwrap();
        let suite = tiny_suite(
            vec![
                BackendSpec::InProcess {
                    name: "broken",
                    run: panicking,
                },
                BackendSpec::InProcess {
                    name: "linked-list",
                    run: linked_append,
                },
            ],
            Workload::SequentialBuildAndSum,
        );
        let registry = Registry::discover(&suite.backends, dir.path(), None);
        let trials = run_suite(&suite, &registry);

        assert_eq!(trials.len(), 2);
        assert!(trials[0].error().unwrap().contains("panicked"));
        assert!(trials[1].average_ms().is_some());
    }

    #[test]
    fn test_insert_workload_checksum_is_verified() {
        let dir = tempfile::tempdir().unwrap();
        let mut suite = tiny_suite(
            vec![BackendSpec::InProcess {
                name: "vec",
                run: vec_insert,
            }],
            Workload::RandomPositionalInsert,
        );
        suite.baseline = "vec";
        let registry = Registry::discover(&suite.backends, dir.path(), None);
        let trials = run_suite(&suite, &registry);

        assert!(trials[0].average_ms().is_some(), "{:?}", trials[0].error());
    }
}
