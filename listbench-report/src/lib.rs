#![warn(missing_docs)]
//! ListBench Report - Ranking and Rendering
//!
//! Data model for per-backend trials, speedup ranking against a designated
//! baseline, and the two output surfaces: a fixed-column terminal table and
//! a JSON document embedding the raw per-repeat timings.

mod json;
mod render;
mod report;

pub use json::to_json;
pub use render::format_suite;
pub use report::{
    build_suite_report, BackendKind, RankedRow, RunMeta, RunReport, SortOrder, SuiteReport,
    TrialOutcome, TrialResult,
};
