//! syntool-meta2sql - convert dataset metadata files into MySQL statements

use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::Cli;
use commands::common::ExitCode;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("error: failed to initialize logging: {err:#}");
        return std::process::ExitCode::from(2);
    }

    match commands::convert::execute(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ExitCode>() {
            Some(ExitCode(code)) => std::process::ExitCode::from(*code),
            None => {
                log::error!("{err:#}");
                std::process::ExitCode::from(2)
            }
        },
    }
}
