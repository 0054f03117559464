//! `adr-analyzer` binary

use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = adr_cli::command().get_matches();

    let (verbosity, json) = adr_cli::cli::log_options(&matches);
    if let Err(e) = adr_cli::logging::init(verbosity, json) {
        eprintln!("warning: {e}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match adr_cli::run(&matches, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
