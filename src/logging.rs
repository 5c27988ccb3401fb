//! Log level/format selection and subscriber construction
//!
//! The subscriber is returned as a `Dispatch` so callers scope it with
//! `tracing::dispatcher::with_default` instead of installing a global.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::MakeWriter;

/// Minimum severity emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    #[value(alias = "warning")]
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Encoding of each log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable key=value lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Build a dispatcher writing to `writer` at the given level and format.
pub fn build_dispatch<W>(level: LogLevel, format: LogFormat, writer: W, ansi: bool) -> Dispatch
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_max_level(Level::from(level))
        .with_target(false)
        .with_writer(writer);

    match format {
        LogFormat::Text => Dispatch::new(builder.with_ansi(ansi).finish()),
        LogFormat::Json => Dispatch::new(
            builder
                .with_ansi(false)
                .json()
                .flatten_event(true)
                .finish(),
        ),
    }
}

/// Dispatcher for the binary: logs go to stderr, coloured only on a terminal.
pub fn stderr_dispatch(level: LogLevel, format: LogFormat) -> Dispatch {
    // Respect NO_COLOR (https://no-color.org/)
    let ansi = std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal();
    build_dispatch(level, format, io::stderr, ansi)
}
