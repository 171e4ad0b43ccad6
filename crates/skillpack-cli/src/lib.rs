//! # skillpack-cli — CLI Tool for Skill Folders
//!
//! Provides the `skillpack` command-line interface over the operations in
//! `skillpack-core`.
//!
//! ## Subcommands
//!
//! - `skillpack validate` — SKILL.md frontmatter validation.
//! - `skillpack package` — Zip packaging of a validated skill folder.
//!
//! Every diagnostic is printed to stdout; the process exit code is 0 on
//! success and 1 on any failure (validation failure, bad path, I/O error).
//!
//! ```bash
//! skillpack validate ~/.codex/skills/my-skill
//! skillpack package ~/.codex/skills/my-skill ./dist
//! ```

pub mod package;
pub mod validate;
