//! JSON Report Output

use crate::report::RunReport;

/// Serialize a run report to pretty-printed JSON.
pub fn to_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::report::{RunMeta, RunReport};

    use super::*;

    #[test]
    fn test_round_trip() {
        let report = RunReport {
            meta: RunMeta {
                version: "0.1.0".into(),
                timestamp: Utc::now(),
            },
            suites: Vec::new(),
        };
        let json = to_json(&report).unwrap();
        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.meta.version, "0.1.0");
    }
}
