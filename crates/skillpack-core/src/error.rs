//! Structured errors for validation and packaging.
//!
//! The `Display` form of every variant is the user-facing message; the CLI
//! prints errors verbatim and maps them to a non-zero exit code. Variants
//! carry the paths and measurements needed to act on the failure.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::Field;

/// Why a skill folder failed validation.
///
/// Checks run in a fixed order and the first failure wins, so an invalid
/// skill reports exactly one of these.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The skill folder has no `SKILL.md` at its top level.
    #[error("SKILL.md not found")]
    SkillMdNotFound,

    /// `SKILL.md` does not start with a `---` line, or the closing `---`
    /// line is missing.
    #[error("Invalid or missing YAML frontmatter (expected leading '---' ... '---')")]
    InvalidFrontmatter,

    /// The frontmatter block is not valid YAML.
    #[error("Invalid YAML in frontmatter: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// The frontmatter parsed, but to a scalar or sequence instead of a
    /// mapping.
    #[error("Frontmatter must be a YAML dictionary")]
    NotADictionary,

    /// A required field is absent from the frontmatter mapping.
    #[error("Missing '{}' in frontmatter", .field.key())]
    MissingField {
        /// The absent field.
        field: Field,
    },

    /// A required field is present but not a YAML string. Never coerced,
    /// even for scalars with an obvious string form.
    #[error("{} must be a string, got {found}", .field.label())]
    TypeMismatch {
        /// The offending field.
        field: Field,
        /// YAML type name of the observed value.
        found: &'static str,
    },

    /// A required field sanitized to the empty string.
    #[error("{} must be non-empty", .field.label())]
    EmptyField {
        /// The offending field.
        field: Field,
    },

    /// A required field exceeds its length limit after sanitization.
    #[error("{} is too long ({len} characters). Maximum is {max} characters.", .field.label())]
    FieldTooLong {
        /// The offending field.
        field: Field,
        /// Sanitized length, in characters.
        len: usize,
        /// The field's limit.
        max: usize,
    },

    /// `SKILL.md` exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Why packaging a skill folder failed.
#[derive(Debug, Error)]
pub enum PackageError {
    /// The skill folder path does not exist.
    #[error("skill folder not found: {}", .path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The skill folder path exists but is not a directory.
    #[error("path is not a directory: {}", .path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Fast pre-filter: the folder has no `SKILL.md`.
    #[error("SKILL.md not found in {}", .path.display())]
    SkillMdMissing {
        /// The skill folder.
        path: PathBuf,
    },

    /// The skill failed validation; packaging never proceeds on an invalid
    /// skill.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The skill folder path has no final component to name the archive
    /// after.
    #[error("cannot determine skill folder name for {}", .path.display())]
    NoFolderName {
        /// The offending path.
        path: PathBuf,
    },

    /// Filesystem traversal failed mid-walk.
    #[error("failed to walk skill folder: {0}")]
    Walk(#[from] walkdir::Error),

    /// Writing the archive failed.
    #[error("failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
