//! tabfeed CLI binary entry point
//!
//! This is a thin wrapper that initializes logging and calls the
//! library's `run_cli()` function.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use tabfeed_cli::run_cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run_cli() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
