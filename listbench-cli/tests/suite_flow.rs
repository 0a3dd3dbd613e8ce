//! End-to-end suite flow: discovery, timing, ranking, rendering.
//!
//! These run artifact-free: only in-process backends are available and every
//! optional artifact is skipped, which is itself the degradation path the
//! suite guarantees.

use listbench_backends::{BackendSpec, Registry};
use listbench_cli::executor::run_suite;
use listbench_cli::suite::SuiteSpec;
use listbench_core::{deque_append, linked_append, vec_insert, Workload};
use listbench_report::{build_suite_report, format_suite, SortOrder, SuiteReport};

fn run_append_flow(backends: Vec<BackendSpec>, iterations: u32) -> SuiteReport {
    let dir = tempfile::tempdir().unwrap();
    let suite = SuiteSpec {
        workload: Workload::SequentialBuildAndSum,
        iterations,
        repeats: 3,
        sort: SortOrder::SpeedupDescending,
        baseline: "linked-list",
        backends,
    };
    let registry = Registry::discover(&suite.backends, dir.path(), None);
    let trials = run_suite(&suite, &registry);
    build_suite_report(
        suite.id(),
        suite.iterations,
        suite.repeats,
        suite.baseline,
        suite.sort,
        trials,
    )
}

fn in_process_pair() -> Vec<BackendSpec> {
    vec![
        BackendSpec::InProcess {
            name: "linked-list",
            run: linked_append,
        },
        BackendSpec::InProcess {
            name: "vec-deque",
            run: deque_append,
        },
    ]
}

#[test]
fn baseline_ratio_is_one_and_order_is_monotone() {
    let report = run_append_flow(in_process_pair(), 5_000);

    let baseline = report.rows.iter().find(|r| r.is_baseline).unwrap();
    assert_eq!(baseline.ratio, Some(1.0));

    let ratios: Vec<f64> = report.rows.iter().map(|r| r.ratio.unwrap()).collect();
    assert!(
        ratios.windows(2).all(|w| w[0] >= w[1]),
        "ranking not monotone: {ratios:?}"
    );
}

#[test]
fn unavailable_backend_is_skipped_and_never_reported() {
    let dir = tempfile::tempdir().unwrap();
    let suite = SuiteSpec {
        workload: Workload::SequentialBuildAndSum,
        iterations: 100,
        repeats: 2,
        sort: SortOrder::SpeedupDescending,
        baseline: "linked-list",
        backends: vec![
            BackendSpec::InProcess {
                name: "linked-list",
                run: linked_append,
            },
            BackendSpec::Vm {
                name: "zig-wasm",
                file: "zig_list.wasm",
                export: "run_append",
            },
        ],
    };
    let registry = Registry::discover(&suite.backends, dir.path(), None);

    assert_eq!(registry.skipped().len(), 1);
    assert_eq!(registry.skipped()[0].name, "zig-wasm");

    let trials = run_suite(&suite, &registry);
    assert!(trials.iter().all(|t| t.backend != "zig-wasm"));

    let report = build_suite_report(
        suite.id(),
        suite.iterations,
        suite.repeats,
        suite.baseline,
        suite.sort,
        trials,
    );
    let rendered = format_suite(&report);
    assert!(!rendered.contains("zig-wasm"));
}

#[test]
fn ranking_is_stable_across_identical_runs() {
    // Costs differ by well over an order of magnitude, so run-to-run noise
    // cannot flip the order even though absolute times vary.
    let first = run_append_flow(in_process_pair(), 20_000);
    let second = run_append_flow(in_process_pair(), 20_000);

    let order = |r: &SuiteReport| -> Vec<String> {
        r.rows.iter().map(|row| row.backend.clone()).collect()
    };
    assert_eq!(order(&first), order(&second));
}

#[test]
fn insert_suite_flow_verifies_generator_parity() {
    let dir = tempfile::tempdir().unwrap();
    let suite = SuiteSpec {
        workload: Workload::RandomPositionalInsert,
        iterations: 2_000,
        repeats: 2,
        sort: SortOrder::TimeAscending,
        baseline: "vec",
        backends: vec![BackendSpec::InProcess {
            name: "vec",
            run: vec_insert,
        }],
    };
    let registry = Registry::discover(&suite.backends, dir.path(), None);
    let trials = run_suite(&suite, &registry);

    // The driver reports the position checksum; a measurement means the
    // engine accepted it against its own reference.
    assert!(
        trials[0].average_ms().is_some(),
        "checksum rejected: {:?}",
        trials[0].error()
    );
}

#[test]
fn rendered_table_has_header_and_separator() {
    let report = run_append_flow(in_process_pair(), 1_000);
    let rendered = format_suite(&report);

    assert!(rendered.starts_with("=== append-and-sum (N=1000, repeats=3) ==="));
    let separators = rendered
        .lines()
        .filter(|l| !l.is_empty() && l.chars().all(|c| c == '-'))
        .count();
    assert_eq!(separators, 2, "expected rule above and below the rows");
}
