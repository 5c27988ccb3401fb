//! Test utilities for building directory trees with controlled mtimes.
//!
//! This module is only compiled for tests, benchmarks, and the `test-utils`
//! feature.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use filetime::FileTime;
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a directory (and its parents) below the root.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Write a file below the root, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Set the modification time of an entry ("" is the root itself).
    pub fn set_modified(&self, path: &str, time: SystemTime) {
        let full_path = self.dir.path().join(path);
        filetime::set_file_mtime(&full_path, FileTime::from_system_time(time))
            .expect("Failed to set mtime");
    }

    /// Set the modification time of an entry to `ago` before now.
    pub fn age(&self, path: &str, ago: Duration) {
        self.set_modified(path, SystemTime::now() - ago);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
