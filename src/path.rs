//! Base directory resolution

use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors produced while resolving the base directory.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("invalid path '{0}': contains a NUL byte")]
    InvalidPath(String),
}

/// Resolve `input` to an absolute path against the current working directory.
///
/// An empty input resolves to the current directory itself.
pub fn expand_path(input: &str) -> Result<PathBuf, ResolveError> {
    if input.contains('\0') {
        return Err(ResolveError::InvalidPath(input.escape_debug().to_string()));
    }
    if Path::new(input).is_absolute() {
        return Ok(clean(Path::new(input)));
    }
    let cwd = std::env::current_dir().map_err(ResolveError::CurrentDir)?;
    Ok(expand_path_from(&cwd, input))
}

/// Resolve `input` against an explicit base directory.
pub fn expand_path_from(base: &Path, input: &str) -> PathBuf {
    let path = Path::new(input);
    if path.is_absolute() {
        clean(path)
    } else {
        clean(&base.join(path))
    }
}

/// Lexically normalize a path: drop `.` segments and fold `..` into its parent.
///
/// Symlinks are not resolved, so `a/link/..` becomes `a` even if `link` points
/// elsewhere.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
