use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use std::io;
use std::process;

use extract_coverage::{lookup_percent, parse_report_reader, write_percent};

const PROGRAM_NAME: &str = "extract_coverage";

#[derive(Parser)]
#[command(name = PROGRAM_NAME)]
#[command(about = "Print the line coverage percentage of one target from an xccov JSON report read on stdin")]
#[command(version)]
struct Cli {
    /// Target (framework) name to look up
    #[arg(allow_hyphen_values = true)]
    framework: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            print_usage();
            process::exit(1);
        }
    };

    match run(&cli) {
        Ok(true) => {}
        // Unknown target: exit code only
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

/// Returns whether the target was found
fn run(cli: &Cli) -> Result<bool> {
    let report = parse_report_reader(io::stdin().lock())?;

    match lookup_percent(&report, &cli.framework)? {
        Some(percent) => {
            write_percent(io::stdout().lock(), percent)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn print_usage() {
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| PROGRAM_NAME.to_string());
    eprintln!("{} {} <framework-name>", "Usage:".bold(), program);
}
