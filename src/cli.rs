//! Command-line options and the run sequence

use std::ffi::OsString;

use clap::Parser;
use tracing::debug;

use crate::age::parse_age;
use crate::error::Result;
use crate::logging::{LogFormat, LogLevel};
use crate::path::expand_path;
use crate::scan::{DirectoryWalker, ScanConfig, ScanOutput, ScanSummary};

/// Long flags that may also be written with a single dash (`-dir`).
const SINGLE_DASH_FLAGS: [&str; 6] = ["log-level", "log-format", "dir", "age", "depth", "help"];

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "hisit")]
#[command(about = "Report directories modified within a recent time window")]
#[command(version)]
pub struct Options {
    /// Log level
    #[arg(long = "log-level", value_enum, value_name = "LEVEL", default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long = "log-format", value_enum, value_name = "FORMAT", default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Base directory to scan (default: current directory)
    #[arg(long = "dir", value_name = "DIR", allow_hyphen_values = true)]
    pub dir: Option<String>,

    /// Age for modification time comparison
    /// Format: <N><unit> with unit s, m, h or d (e.g., 30m, 2h, 1d)
    #[arg(long = "age", value_name = "AGE", default_value = "1d", allow_hyphen_values = true)]
    pub age: String,

    /// Depth of directory traversal (negative values scan immediate children only)
    #[arg(long = "depth", value_name = "N", default_value_t = 2, allow_negative_numbers = true)]
    pub depth: i64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Text,
            dir: None,
            age: "1d".to_string(),
            depth: 2,
        }
    }
}

impl Options {
    /// Parse options from raw arguments, accepting single-dash long flags.
    pub fn parse_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Effective traversal depth; negative depths clamp to 1.
    pub fn depth_limit(&self) -> usize {
        if self.depth < 0 {
            1
        } else {
            usize::try_from(self.depth).unwrap_or(usize::MAX)
        }
    }

    /// Resolve the age expression and depth into a walker configuration.
    pub fn scan_config(&self) -> Result<ScanConfig> {
        Ok(ScanConfig {
            max_depth: self.depth_limit(),
            age: parse_age(&self.age)?,
        })
    }
}

/// Rewrite single-dash long flags (`-depth 3`, `-age=2h`) to `--depth 3`,
/// `--age=2h` so clap accepts them. The first item is the program name.
/// Values that follow a flag and everything after `--` are left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let flag = text
            .strip_prefix("--")
            .or_else(|| text.strip_prefix('-'))
            .unwrap_or("");
        let (name, inline_value) = match flag.split_once('=') {
            Some((name, _)) => (name, true),
            None => (flag, false),
        };

        if !SINGLE_DASH_FLAGS.contains(&name) {
            out.push(arg);
            continue;
        }

        expect_value = !inline_value && name != "help";
        if text.starts_with("--") {
            out.push(arg);
        } else {
            out.push(OsString::from(format!("-{}", text)));
        }
    }

    out
}

/// Parse the age, resolve the base directory, then walk it.
///
/// A bad age fails before the filesystem is touched.
pub fn run<O: ScanOutput>(options: &Options, out: &mut O) -> Result<ScanSummary> {
    debug!(
        log_level = ?options.log_level,
        log_format = ?options.log_format,
        dir = options.dir.as_deref().unwrap_or(""),
        age = %options.age,
        depth = options.depth,
        "options"
    );

    let config = options.scan_config()?;
    let base = expand_path(options.dir.as_deref().unwrap_or(""))?;

    debug!(
        base = %base.display(),
        age_secs = config.age.num_seconds(),
        max_depth = config.max_depth,
        "scanning"
    );

    let summary = DirectoryWalker::new(config).scan(&base, out)?;

    debug!(
        directories = summary.directories,
        files = summary.files,
        matched = summary.matched,
        "scan complete"
    );

    Ok(summary)
}
