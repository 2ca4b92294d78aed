use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use solrwatch::{logging, Cli, Commands, Severity, Verdict};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_error(err),
    };

    logging::init(cli.verbose);

    let verdict = match &cli.command {
        Commands::Cores(args) => solrwatch::run_cores(args, cli.config.as_deref()),
    };

    println!("{}", verdict);
    exit_code(verdict.severity())
}

/// Help and version exit cleanly; any other parse failure is UNKNOWN so a
/// supervisor never mistakes a misconfigured check for a CRITICAL service.
fn usage_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = err.print();
            let summary = err
                .to_string()
                .lines()
                .next()
                .unwrap_or("invalid arguments")
                .trim_start_matches("error: ")
                .to_string();
            let verdict = Verdict::single(Severity::Unknown, summary);
            println!("{}", verdict);
            exit_code(verdict.severity())
        }
    }
}

fn exit_code(severity: Severity) -> ExitCode {
    ExitCode::from(severity.exit_code() as u8)
}
