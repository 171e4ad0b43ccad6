//! # skillpack CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; handlers return an exit
//! code and never panic on bad input.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skillpack_cli::package::{run_package, PackageArgs};
use skillpack_cli::validate::{run_validate, ValidateArgs};

/// Skill folder toolchain.
///
/// Validates SKILL.md frontmatter and packages skill folders into zip
/// archives for sharing and backups.
#[derive(Parser, Debug)]
#[command(name = "skillpack", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a skill folder's SKILL.md frontmatter.
    Validate(ValidateArgs),

    /// Package a validated skill folder into a zip archive.
    Package(PackageArgs),
}

fn main() -> ExitCode {
    // Usage errors exit 1 like every other failure; help and version
    // requests still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.exit_code() == 0 => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            println!("{e}");
            return ExitCode::from(1);
        }
    };

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Package(args) => run_package(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            println!("ERROR: {e:#}");
            ExitCode::from(1)
        }
    }
}
