#![forbid(unsafe_code)]

//! `tenessi-page`: replay a scripted landing page session.

use std::process::ExitCode;

use tenessi_page::{CliAction, HELP_TEXT, Opts, PageError, VERSION, init_logging, run};
use tracing::error;

fn main() -> ExitCode {
    let opts = match Opts::parse() {
        Ok(CliAction::Run(opts)) => opts,
        Ok(CliAction::Help) => {
            println!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        Ok(CliAction::Version) => {
            println!("tenessi-page {VERSION}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let err = PageError::from(err);
            eprintln!("{err}");
            eprintln!("Run with --help for usage information.");
            return ExitCode::from(err.exit_code());
        }
    };

    if let Err(err) = init_logging(&opts.log_config()) {
        let err = PageError::from(err);
        eprintln!("tenessi-page: {err}");
        return ExitCode::from(err.exit_code());
    }

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session failed");
            eprintln!("tenessi-page: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
