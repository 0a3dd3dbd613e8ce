//! Suite Definitions
//!
//! The two fixed suites and their backend tables. Parameters mirror the
//! workload shapes: the append workload is roughly linear per backend and
//! gets a large N with many repeats; random insertion is roughly quadratic
//! for the shifting containers and gets a smaller N with fewer repeats.

use listbench_backends::BackendSpec;
use listbench_core::{deque_append, deque_insert, linked_append, vec_insert, Workload};
use listbench_report::SortOrder;

use crate::config::SuiteOverrides;

/// Everything the timing engine needs to run one suite.
pub struct SuiteSpec {
    /// Workload driven through every backend.
    pub workload: Workload,
    /// Iteration count passed to each invocation.
    pub iterations: u32,
    /// Back-to-back repeats per backend.
    pub repeats: u32,
    /// Ranking direction of the rendered table.
    pub sort: SortOrder,
    /// Designated baseline backend.
    pub baseline: &'static str,
    /// Backends to discover, in table order.
    pub backends: Vec<BackendSpec>,
}

impl SuiteSpec {
    /// Suite identifier (the workload id).
    pub fn id(&self) -> &'static str {
        self.workload.id()
    }

    /// Apply configuration overrides to the fixed parameters.
    pub fn with_overrides(mut self, overrides: &SuiteOverrides) -> Self {
        if let Some(iterations) = overrides.iterations {
            self.iterations = iterations;
        }
        if let Some(repeats) = overrides.repeats {
            self.repeats = repeats;
        }
        self
    }
}

/// Append-and-sum: large N, ranked by speedup over the naive linked list.
pub fn append_suite() -> SuiteSpec {
    SuiteSpec {
        workload: Workload::SequentialBuildAndSum,
        iterations: 100_000,
        repeats: 10,
        sort: SortOrder::SpeedupDescending,
        baseline: "linked-list",
        backends: vec![
            BackendSpec::InProcess {
                name: "linked-list",
                run: linked_append,
            },
            BackendSpec::InProcess {
                name: "vec-deque",
                run: deque_append,
            },
            BackendSpec::Kernel {
                name: "kernel-safe",
                symbol: "run_safe_append",
            },
            BackendSpec::Kernel {
                name: "kernel-raw",
                symbol: "run_raw_append",
            },
            BackendSpec::Kernel {
                name: "kernel-arena",
                symbol: "run_arena_append",
            },
            BackendSpec::Kernel {
                name: "kernel-zipper",
                symbol: "run_zipper_append",
            },
            BackendSpec::Vm {
                name: "zig-wasm",
                file: "zig_list.wasm",
                export: "run_append",
            },
            BackendSpec::Vm {
                name: "wat-wasm",
                file: "wat_list.wasm",
                export: "run_append",
            },
        ],
    }
}

/// Random-insert: smaller N, ranked by ascending absolute time.
pub fn insert_suite() -> SuiteSpec {
    SuiteSpec {
        workload: Workload::RandomPositionalInsert,
        iterations: 30_000,
        repeats: 5,
        sort: SortOrder::TimeAscending,
        baseline: "vec",
        backends: vec![
            BackendSpec::InProcess {
                name: "vec",
                run: vec_insert,
            },
            BackendSpec::InProcess {
                name: "vec-deque",
                run: deque_insert,
            },
            BackendSpec::Kernel {
                name: "kernel-safe",
                symbol: "run_safe_insert",
            },
            BackendSpec::Kernel {
                name: "kernel-raw",
                symbol: "run_raw_insert",
            },
            BackendSpec::Kernel {
                name: "kernel-arena",
                symbol: "run_arena_insert",
            },
            BackendSpec::Kernel {
                name: "kernel-zipper",
                symbol: "run_zipper_insert",
            },
            BackendSpec::Kernel {
                name: "kernel-raw-zipper",
                symbol: "run_raw_zipper_insert",
            },
            BackendSpec::Vm {
                name: "zig-zipper-wasm",
                file: "zig_zipper.wasm",
                export: "run_insert",
            },
            BackendSpec::Native {
                name: "zig-zipper-native",
                stem: "zig_zipper",
                symbol: "run_insert",
            },
        ],
    }
}
