use std::io;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use scour::cli::Cli;
use scour::exit::ExitCode;

mod cmd_scan;

fn main() -> process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_outcome(err).into(),
    };

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "scour", &mut io::stdout());
        return ExitCode::Success.into();
    }

    let Some(pattern) = cli.pattern.as_deref() else {
        // clap enforces this whenever --completions is absent.
        eprintln!("scour: a pattern is required");
        return ExitCode::UnhandledFailure.into();
    };

    cmd_scan::run(&cli, pattern).into()
}

/// Map a parse-time exit: help and version requests are successful
/// output, anything else is a usage failure.
fn parse_outcome(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
        _ => ExitCode::UnhandledFailure,
    }
}
