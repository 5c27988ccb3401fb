//! DirectoryWalker - depth-limited pre-order walk with mtime comparison

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use ignore::WalkBuilder;
use thiserror::Error;
use tracing::debug;

use super::config::ScanConfig;
use super::output::{RecentDir, ScanOutput};

/// Errors that abort a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("cannot read modification time of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

/// Counts of entries visited below the base directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub directories: usize,
    pub files: usize,
    pub matched: usize,
}

/// Walks a directory tree and reports recently modified directories.
pub struct DirectoryWalker {
    config: ScanConfig,
}

impl DirectoryWalker {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `root`, comparing every directory against the current time.
    pub fn scan<O: ScanOutput>(&self, root: &Path, out: &mut O) -> Result<ScanSummary, ScanError> {
        self.scan_at(root, Utc::now(), out)
    }

    /// Scan `root` using `now` as the reference time for every comparison.
    ///
    /// The first error stops the walk. Matches already handed to `out` stay
    /// reported.
    pub fn scan_at<O: ScanOutput>(
        &self,
        root: &Path,
        now: DateTime<Utc>,
        out: &mut O,
    ) -> Result<ScanSummary, ScanError> {
        let mut summary = ScanSummary::default();

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .max_depth(Some(self.config.max_depth))
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for result in walker {
            let entry = result.map_err(|source| ScanError::Walk {
                root: root.to_path_buf(),
                source,
            })?;

            let depth = relative_depth(root, entry.path()).unwrap_or(entry.depth());
            if depth == 0 {
                continue;
            }
            // max_depth already prunes deeper subtrees; this guards the contract
            if depth > self.config.max_depth {
                continue;
            }

            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if !is_dir {
                summary.files += 1;
                continue;
            }
            summary.directories += 1;

            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified().map_err(ignore::Error::from))
                .map_err(|source| ScanError::Metadata {
                    path: entry.path().to_path_buf(),
                    source,
                })?;
            let modified = DateTime::<Utc>::from(modified);
            let elapsed = now - modified;

            if elapsed <= self.config.age {
                summary.matched += 1;
                out.report(&RecentDir {
                    path: entry.path().to_path_buf(),
                    depth,
                    modified,
                    elapsed,
                });
            } else {
                debug!(
                    directory = %entry.path().display(),
                    elapsed_secs = elapsed.num_seconds(),
                    "directory outside age window"
                );
            }
        }

        Ok(summary)
    }
}

/// Number of path segments between `base` and `path`.
///
/// Returns `None` when `path` is not under `base`.
pub fn relative_depth(base: &Path, path: &Path) -> Option<usize> {
    path.strip_prefix(base).ok().map(|rel| rel.components().count())
}
