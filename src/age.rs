//! Age expression parsing
//!
//! An age expression is a base-10 integer followed by a single unit suffix:
//! `30s`, `15m`, `2h`, `1d`. The magnitude is signed, so `-1h` parses to a
//! negative window.

use std::num::ParseIntError;

use chrono::TimeDelta;
use thiserror::Error;
use tracing::debug;

/// Errors produced while parsing an age expression.
#[derive(Debug, Error)]
pub enum AgeError {
    #[error("age expression is empty")]
    Empty,

    #[error("invalid age value '{value}': {source}")]
    InvalidValue {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unsupported time unit: {0}")]
    UnsupportedUnit(char),

    #[error("age '{0}' is out of range")]
    OutOfRange(String),
}

/// Time unit selected by the trailing character of an age expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl AgeUnit {
    /// Map a suffix character to its unit.
    pub fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            's' => Some(Self::Seconds),
            'm' => Some(Self::Minutes),
            'h' => Some(Self::Hours),
            'd' => Some(Self::Days),
            _ => None,
        }
    }

    /// Number of seconds in one unit.
    pub fn seconds(self) -> i64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 60 * 60,
            Self::Days => 24 * 60 * 60,
        }
    }
}

/// Parse an age expression like "1d" or "30m" into a signed duration.
pub fn parse_age(age: &str) -> Result<TimeDelta, AgeError> {
    let suffix = age.chars().last().ok_or(AgeError::Empty)?;
    let magnitude = &age[..age.len() - suffix.len_utf8()];

    let value: i64 = magnitude
        .parse()
        .map_err(|source| AgeError::InvalidValue {
            value: magnitude.to_string(),
            source,
        })?;

    let unit = AgeUnit::from_suffix(suffix).ok_or(AgeError::UnsupportedUnit(suffix))?;

    debug!(age, unit = ?unit, value, "parsed age");

    value
        .checked_mul(unit.seconds())
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(|| AgeError::OutOfRange(age.to_string()))
}
