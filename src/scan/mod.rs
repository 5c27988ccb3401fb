//! Recently modified directory scanning
//!
//! `DirectoryWalker` performs a single depth-limited, pre-order walk from a
//! base directory and hands every directory modified within the age window
//! to a `ScanOutput`.

mod config;
mod output;
mod walker;

pub use config::ScanConfig;
pub use output::{LogReporter, RecentDir, ScanOutput, format_elapsed};
pub use walker::{DirectoryWalker, ScanError, ScanSummary, relative_depth};
