//! # Validate Subcommand
//!
//! Checks a skill folder's `SKILL.md`: frontmatter delimiters, YAML shape,
//! and the `name` / `description` field rules. Prints the validation
//! message and maps the outcome to the process exit code.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use skillpack_core::validation_message;

/// Arguments for the `skillpack validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the skill folder.
    #[arg(value_name = "SKILL_DIR")]
    pub path: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if the skill is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    tracing::debug!(skill_dir = %args.path.display(), "validating skill folder");

    let (valid, message) = validation_message(&args.path);
    println!("{message}");
    Ok(if valid { 0 } else { 1 })
}
