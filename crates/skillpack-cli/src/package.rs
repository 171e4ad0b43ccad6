//! # Package Subcommand
//!
//! Packages a validated skill folder into a zip archive. Validation runs
//! first and gates packaging; every failure is printed and mapped to exit
//! code 1 rather than surfaced as a process fault.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use skillpack_core::package_skill;

/// Arguments for the `skillpack package` subcommand.
#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Path to the skill folder.
    #[arg(value_name = "SKILL_DIR")]
    pub skill_path: PathBuf,

    /// Output directory for the archive (defaults to the current directory).
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Execute the package subcommand.
///
/// Returns exit code: 0 on success, 1 on any failure.
pub fn run_package(args: &PackageArgs) -> Result<u8> {
    tracing::debug!(skill_dir = %args.skill_path.display(), "packaging skill folder");

    println!("Packaging skill: {}", args.skill_path.display());
    if let Some(ref dir) = args.output_dir {
        println!("Output directory: {}", dir.display());
    }

    match package_skill(&args.skill_path, args.output_dir.as_deref()) {
        Ok(archive) => {
            for entry in &archive.entries {
                println!("  Added: {entry}");
            }
            println!("OK: packaged skill to {}", archive.path.display());
            Ok(0)
        }
        Err(e) => {
            println!("ERROR: {e}");
            Ok(1)
        }
    }
}
