use std::io;
use std::process::ExitCode;

use u_cpusched::cli::{self, CliCommand, CliError};
use u_cpusched::logging;

fn main() -> ExitCode {
    let config = match cli::parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Help) => {
            print!("{}", cli::usage());
            return ExitCode::SUCCESS;
        }
        Ok(CliCommand::Run(config)) => config,
        Err(e) => {
            eprintln!("error: {e}\n");
            eprint!("{}", cli::usage());
            return ExitCode::from(2);
        }
    };

    if let Err(e) = logging::init(config.verbosity) {
        eprintln!("warning: logger unavailable: {e}");
    }

    let stdin = io::stdin();
    match cli::execute(&config, stdin.lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(msg)) => {
            eprintln!("error: {msg}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
