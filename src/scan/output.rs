//! Reporting sink for matched directories

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use tracing::info;

/// A directory whose modification time fell inside the recency window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentDir {
    pub path: PathBuf,
    /// Path segments between the base and this directory (always >= 1).
    pub depth: usize,
    pub modified: DateTime<Utc>,
    /// `now - modified`; negative when the mtime lies in the future.
    pub elapsed: TimeDelta,
}

/// Callback receiving each matched directory as the walk finds it.
pub trait ScanOutput {
    fn report(&mut self, dir: &RecentDir);
}

/// Collects matches in walk order.
impl ScanOutput for Vec<RecentDir> {
    fn report(&mut self, dir: &RecentDir) {
        self.push(dir.clone());
    }
}

/// Emits one `info` event per match through the active tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ScanOutput for LogReporter {
    fn report(&mut self, dir: &RecentDir) {
        info!(
            directory = %dir.path.display(),
            depth = dir.depth,
            modified = %dir.modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            age = %format_elapsed(dir.elapsed),
            "modified directory found"
        );
    }
}

/// Render an elapsed time at second precision, e.g. "1h 2m 5s".
///
/// Negative values (mtime in the future) are prefixed with "-".
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let secs = elapsed.num_seconds();
    let rendered = humantime::format_duration(Duration::from_secs(secs.unsigned_abs()));
    if secs < 0 {
        format!("-{}", rendered)
    } else {
        rendered.to_string()
    }
}
