//! Demonstrates the split, colored output of `cli_logging`.
//!
//! Writes one line per severity: `DEBUG` (with `--debug`) and `INFO` to stdout,
//! `WARNING`, `ERROR` and `CRITICAL` to stderr.

use std::process::ExitCode;

use clap::Parser;
use cli_logging::{critical, Configuration};
use log::{debug, error, info, warn};

/// Writes one sample log line per severity.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long)]
    debug: bool,

    /// Disable color output.
    #[arg(short, long)]
    nocolor: bool,

    /// Prefix for all lines; defaults to the name of this executable.
    #[arg(short, long)]
    progname: Option<String>,

    /// Show the target of each line after the prefix.
    #[arg(short, long)]
    targets: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Configuration::new().program_name_from_args();
    let config = match cli.progname {
        Some(progname) => config.program_name(progname),
        None => config,
    };
    let config = config
        .debug(cli.debug)
        .color(!cli.nocolor)
        .with_target(cli.targets);

    if let Err(e) = cli_logging::configure(&config) {
        let argv0 = std::env::args().next().unwrap_or_default();
        eprintln!("{argv0}: error during import: {e}");
        return ExitCode::FAILURE;
    }

    debug!("Debug message");
    info!("Info message");
    warn!("This is a warning!");
    error!("This is an ERROR!");
    critical!("Critical issue!!!");

    log::logger().flush();
    ExitCode::SUCCESS
}
