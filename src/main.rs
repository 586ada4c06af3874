//! kicad-to-yy1: convert KiCad placement files for the Neoden YY1
//!
//! Reads a KiCad component position CSV and writes the placement file
//! loaded by the Neoden YY1 pick-and-place controller.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use kicad_to_yy1::config::{self, Config};
use kicad_to_yy1::convert_file;

/// Convert a KiCad placement CSV into a Neoden YY1 placement file.
///
/// The result of the conversion is printed to standard output. Logging,
/// when enabled, goes to standard error.
#[derive(Parser, Debug)]
#[command(name = "kicad-to-yy1")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// KiCad component placement CSV to read
    #[arg(value_name = "INPUT_CSV")]
    input: PathBuf,

    /// YY1 placement file to write
    #[arg(value_name = "OUTPUT_CSV")]
    output: PathBuf,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for kicad-to-yy1.
fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage goes to stdout alongside the conversion result.
            print!("{}", e.render());
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    // Only an explicitly requested config file may stop the conversion.
    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) if args.config.is_none() => {
            eprintln!("Warning: ignoring default configuration: {e}");
            Config::default()
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    // Display GPL license notice (required by GPLv3 Section 5d)
    if !args.quiet {
        eprintln!(
            "kicad-to-yy1 {}  Copyright (C) 2026  The Embedded Society",
            env!("CARGO_PKG_VERSION")
        );
        eprintln!("This program comes with ABSOLUTELY NO WARRANTY.");
        eprintln!("This is free software, licensed under GPL-3.0-or-later.");
        eprintln!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
        eprintln!();
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        input = %args.input.display(),
        output = %args.output.display(),
        "Starting conversion"
    );

    // Conversion failures are reported, not turned into an exit status.
    match convert_file(&args.input, &args.output) {
        Ok(report) => println!("{}", report.message()),
        Err(e) => {
            debug!(error = ?e, "Conversion failed");
            println!("{}", e.diagnostic());
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn requires_two_paths() {
        assert!(Args::try_parse_from(["kicad-to-yy1", "in.csv"]).is_err());
        assert!(Args::try_parse_from(["kicad-to-yy1", "a.csv", "b.csv", "c.csv"]).is_err());

        let args = Args::try_parse_from(["kicad-to-yy1", "in.csv", "out.csv"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.csv"));
        assert_eq!(args.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn log_level_precedence() {
        assert_eq!(get_log_level(3, true, "trace"), Level::ERROR);
        assert_eq!(get_log_level(2, false, "error"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "Info"), Level::INFO);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
    }
}
