//! CLI entry point for hisit

use std::io;
use std::process::ExitCode;

use hisit::{LogReporter, Options, stderr_dispatch};
use tracing::error;

fn main() -> io::Result<ExitCode> {
    let options = match Options::parse_args(std::env::args_os()) {
        Ok(options) => options,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            // usage errors exit 1 rather than clap's 2
            e.print()?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let dispatch = stderr_dispatch(options.log_level, options.log_format);
    let code = tracing::dispatcher::with_default(&dispatch, || {
        match hisit::run(&options, &mut LogReporter) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "run failed");
                ExitCode::FAILURE
            }
        }
    });
    Ok(code)
}
