//! hisit - report directories modified within a recent time window

pub mod age;
pub mod cli;
pub mod error;
pub mod logging;
pub mod path;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use age::{AgeError, AgeUnit, parse_age};
pub use cli::{Options, normalize_args, run};
pub use error::{HisitError, Result};
pub use logging::{LogFormat, LogLevel, build_dispatch, stderr_dispatch};
pub use path::{ResolveError, expand_path, expand_path_from};
pub use scan::{DirectoryWalker, LogReporter, RecentDir, ScanConfig, ScanError, ScanOutput, ScanSummary};
