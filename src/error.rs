//! Top-level error type

use thiserror::Error;

use crate::age::AgeError;
use crate::path::ResolveError;
use crate::scan::ScanError;

/// Shared `Result` alias for the crate.
pub type Result<T> = std::result::Result<T, HisitError>;

/// Any failure that ends a run.
#[derive(Debug, Error)]
pub enum HisitError {
    #[error("error parsing age: {0}")]
    Age(#[from] AgeError),

    #[error("error expanding path: {0}")]
    Path(#[from] ResolveError),

    #[error("error scanning directories: {0}")]
    Scan(#[from] ScanError),
}
