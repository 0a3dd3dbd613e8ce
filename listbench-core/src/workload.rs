//! Workload Definitions
//!
//! Pure functions of the iteration count. A workload never owns timing or
//! backend concerns; it only names the operation sequence and knows the
//! checksum a correct backend must report for a given `n`.

use crate::rng::position_checksum;

/// One of the two fixed workloads every backend is driven through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// Append integers `0..n-1` to an empty container, then sum them.
    /// Measures amortized append plus a full traversal.
    SequentialBuildAndSum,
    /// Insert ascending integers at generator-derived positions.
    /// Adversarial for pointer-chasing structures (O(position) traversal)
    /// versus contiguous ones (O(length - position) shift).
    RandomPositionalInsert,
}

impl Workload {
    /// Stable identifier, used in suite headers and reports.
    pub fn id(&self) -> &'static str {
        match self {
            Workload::SequentialBuildAndSum => "append-and-sum",
            Workload::RandomPositionalInsert => "random-insert",
        }
    }

    /// Checksum a correct backend reports for an `n`-iteration run.
    ///
    /// Append-and-sum yields `n*(n-1)/2` exactly; random-insert yields the
    /// sum of the derived insertion positions. Backends that return no
    /// checksum (the native-library sentinel contract) are exempt from the
    /// comparison, not from the workload.
    pub fn expected_checksum(&self, n: u32) -> i64 {
        match self {
            Workload::SequentialBuildAndSum => {
                let n = n as i64;
                n * (n - 1) / 2
            }
            Workload::RandomPositionalInsert => position_checksum(n),
        }
    }
}
