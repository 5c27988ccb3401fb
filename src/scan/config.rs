//! Configuration for the directory walker

use chrono::TimeDelta;

/// Default traversal depth below the base directory.
pub const DEFAULT_DEPTH: usize = 2;

/// Configuration for a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Deepest level (in path segments below the base) that is visited.
    /// 0 visits only the base, which is never reported.
    pub max_depth: usize,
    /// Width of the recency window. Directories with `now - mtime <= age` match.
    pub age: TimeDelta,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            age: TimeDelta::days(1),
        }
    }
}
