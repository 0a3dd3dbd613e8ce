//! Terminal Table Rendering
//!
//! Fixed-column output: header line with the suite parameters, one row per
//! successful backend (name, average time, ratio), a closing separator, then
//! any warning lines for excluded backends.

use crate::report::SuiteReport;

const TIME_WIDTH: usize = 12;
const RATIO_WIDTH: usize = 10;

/// Render one suite report as an aligned table.
pub fn format_suite(report: &SuiteReport) -> String {
    let name_width = report
        .rows
        .iter()
        .map(|r| r.backend.len())
        .chain(std::iter::once("backend".len()))
        .max()
        .unwrap_or(7);
    let rule_width = name_width + TIME_WIDTH + RATIO_WIDTH + 6;

    let mut out = String::new();
    out.push_str(&format!(
        "=== {} (N={}, repeats={}) ===\n",
        report.suite, report.iterations, report.repeats
    ));
    out.push_str(&format!(
        "{:<name_width$}  {:>TIME_WIDTH$}  {:>RATIO_WIDTH$}\n",
        "backend", "avg time", "ratio"
    ));
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    for row in &report.rows {
        let time = format!("{:.2} ms", row.average_ms);
        let ratio = match row.ratio {
            Some(r) => format!("{r:.2}x"),
            None => "-".to_string(),
        };
        let marker = if row.is_baseline { " (baseline)" } else { "" };
        out.push_str(&format!(
            "{:<name_width$}  {:>TIME_WIDTH$}  {:>RATIO_WIDTH$}{}\n",
            row.backend, time, ratio, marker
        ));
    }

    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    for warning in &report.warnings {
        out.push_str(&format!("warning: {warning}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::report::{build_suite_report, SortOrder, TrialOutcome, TrialResult};
    use crate::report::BackendKind;

    use super::*;

    fn sample_report() -> SuiteReport {
        build_suite_report(
            "append-and-sum",
            1000,
            5,
            "linked-list",
            SortOrder::SpeedupDescending,
            vec![
                TrialResult {
                    backend: "linked-list".into(),
                    kind: BackendKind::InProcess,
                    outcome: TrialOutcome::Measured {
                        average_ms: 20.0,
                        repeats_ms: vec![20.0; 5],
                    },
                },
                TrialResult {
                    backend: "kernel-raw".into(),
                    kind: BackendKind::FfiNative,
                    outcome: TrialOutcome::Measured {
                        average_ms: 2.0,
                        repeats_ms: vec![2.0; 5],
                    },
                },
                TrialResult {
                    backend: "zig-wasm".into(),
                    kind: BackendKind::EmbeddedVm,
                    outcome: TrialOutcome::Failed {
                        error: "module not found".into(),
                    },
                },
            ],
        )
    }

    #[test]
    fn test_header_names_suite_and_parameters() {
        let out = format_suite(&sample_report());
        assert!(out.starts_with("=== append-and-sum (N=1000, repeats=5) ==="));
    }

    #[test]
    fn test_rows_and_markers() {
        let out = format_suite(&sample_report());
        assert!(out.contains("10.00x"));
        assert!(out.contains("(baseline)"));
        assert!(out.contains("1.00x"));
    }

    #[test]
    fn test_errored_backend_is_a_warning_line_only() {
        let out = format_suite(&sample_report());
        assert!(out.contains("warning: zig-wasm: module not found"));
        // Not a table row.
        let table: Vec<&str> = out
            .lines()
            .take_while(|l| !l.starts_with("warning"))
            .collect();
        assert!(!table.iter().any(|l| l.contains("zig-wasm")));
    }
}
