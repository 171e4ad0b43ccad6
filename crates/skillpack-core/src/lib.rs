#![deny(missing_docs)]

//! # skillpack-core — Skill Folder Validation and Packaging
//!
//! A *skill folder* is a directory containing a `SKILL.md` file: YAML
//! frontmatter delimited by `---` lines, followed by free-form markdown
//! instructions. This crate provides the two operations the toolchain is
//! built from:
//!
//! - [`validate_skill`] — check that `SKILL.md` exists, its frontmatter
//!   parses to a YAML mapping, and the required `name` / `description`
//!   fields are strings within their length limits.
//! - [`package_skill`] — validate a skill folder, then write every file in
//!   it into a `<folder-name>.zip` archive with the folder name as the
//!   top-level component.
//!
//! Both operations are synchronous, touch only the paths they are given,
//! and report every failure as a structured error whose `Display` form is
//! the user-facing message. Validation failures never coerce: a YAML
//! integer where a string is required is an error, not a stringification.

pub mod archive;
pub mod error;
pub mod frontmatter;
pub mod sanitize;
pub mod validate;

pub use archive::{package_skill, PackagedArchive};
pub use error::{PackageError, ValidationError};
pub use sanitize::sanitize_one_line;
pub use validate::{validate_skill, validation_message, Field, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};
