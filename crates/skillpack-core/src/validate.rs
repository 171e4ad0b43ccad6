//! Skill folder validation.
//!
//! Validates only what skill discovery cares about: `SKILL.md` exists, the
//! YAML frontmatter parses to a mapping, and `name` / `description` are
//! present, strings, non-empty, and within their length limits. Checks run
//! in a fixed order and the first failure short-circuits.
//!
//! Limits are enforced against the sanitized one-line form of each value
//! (see [`crate::sanitize`]), so multi-line YAML scalars are measured by
//! their collapsed length.

use std::path::Path;

use crate::error::ValidationError;
use crate::frontmatter::{parse_frontmatter, yaml_type_name};
use crate::sanitize::sanitize_one_line;

/// Maximum sanitized length of the `name` field, in characters.
pub const NAME_MAX_LEN: usize = 100;

/// Maximum sanitized length of the `description` field, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// The required frontmatter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The `name` field.
    Name,
    /// The `description` field.
    Description,
}

impl Field {
    /// Frontmatter key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
        }
    }

    /// Capitalized label used in failure messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
        }
    }

    /// Length limit for the sanitized value.
    pub fn max_len(&self) -> usize {
        match self {
            Field::Name => NAME_MAX_LEN,
            Field::Description => DESCRIPTION_MAX_LEN,
        }
    }
}

/// Validate a skill folder.
///
/// Reads `<skill_dir>/SKILL.md` and runs the check sequence; the returned
/// error's `Display` form is the user-facing failure message. Has no side
/// effects beyond reading that one file.
pub fn validate_skill(skill_dir: &Path) -> Result<(), ValidationError> {
    let skill_md = skill_dir.join("SKILL.md");
    if !skill_md.exists() {
        return Err(ValidationError::SkillMdNotFound);
    }

    let content = std::fs::read_to_string(&skill_md).map_err(|source| ValidationError::Io {
        path: skill_md.clone(),
        source,
    })?;

    let mapping = parse_frontmatter(&content)?;

    // Presence of both keys is checked before any per-field validation.
    for field in [Field::Name, Field::Description] {
        if field_value(&mapping, field).is_none() {
            return Err(ValidationError::MissingField { field });
        }
    }

    check_field(&mapping, Field::Name)?;
    check_field(&mapping, Field::Description)?;

    tracing::debug!(skill_dir = %skill_dir.display(), "skill validated");
    Ok(())
}

/// Validate a skill folder and render the outcome as its user-facing
/// message: "Skill is valid!" on success, the failure's `Display` form
/// otherwise.
pub fn validation_message(skill_dir: &Path) -> (bool, String) {
    match validate_skill(skill_dir) {
        Ok(()) => (true, "Skill is valid!".to_owned()),
        Err(e) => (false, e.to_string()),
    }
}

fn field_value(mapping: &serde_yaml::Mapping, field: Field) -> Option<&serde_yaml::Value> {
    mapping.get(&serde_yaml::Value::String(field.key().to_owned()))
}

/// Type, emptiness, and length checks for one required field.
fn check_field(mapping: &serde_yaml::Mapping, field: Field) -> Result<(), ValidationError> {
    // Presence was established up front.
    let value = field_value(mapping, field).ok_or(ValidationError::MissingField { field })?;

    let raw = value.as_str().ok_or_else(|| ValidationError::TypeMismatch {
        field,
        found: yaml_type_name(value),
    })?;

    let sanitized = sanitize_one_line(raw);
    if sanitized.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }

    let len = sanitized.chars().count();
    if len > field.max_len() {
        return Err(ValidationError::FieldTooLong {
            field,
            len,
            max: field.max_len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn skill_dir(content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("SKILL.md"), content).unwrap();
        dir
    }

    fn doc(name: &str, description: &str) -> String {
        format!("---\nname: {name}\ndescription: {description}\n---\n# Body\n")
    }

    #[test]
    fn valid_skill_passes() {
        let dir = skill_dir(&doc("demo", "A demo skill."));
        assert!(validate_skill(dir.path()).is_ok());
    }

    #[test]
    fn missing_skill_md_has_exact_message() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_skill(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "SKILL.md not found");
    }

    #[test]
    fn nonexistent_dir_reports_skill_md_not_found() {
        let err = validate_skill(&PathBuf::from("/tmp/skillpack-no-such-dir")).unwrap_err();
        assert_eq!(err.to_string(), "SKILL.md not found");
    }

    #[test]
    fn document_without_frontmatter_fails() {
        let dir = skill_dir("# Just markdown\nNo frontmatter here.\n");
        let err = validate_skill(dir.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid or missing YAML frontmatter (expected leading '---' ... '---')"
        );
    }

    #[test]
    fn unterminated_frontmatter_fails_with_same_message() {
        let dir = skill_dir("---\nname: demo\ndescription: x\n");
        let err = validate_skill(dir.path()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFrontmatter));
    }

    #[test]
    fn sequence_frontmatter_is_rejected() {
        let dir = skill_dir("---\n- name\n- description\n---\n");
        let err = validate_skill(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "Frontmatter must be a YAML dictionary");
    }

    #[test]
    fn missing_name_is_reported_before_description() {
        let dir = skill_dir("---\nother: value\n---\n");
        let err = validate_skill(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "Missing 'name' in frontmatter");
    }

    #[test]
    fn missing_description_is_reported_even_if_name_is_invalid() {
        // Presence of both keys is checked before any field validation.
        let dir = skill_dir(&format!("---\nname: {}\n---\n", "A".repeat(101)));
        let err = validate_skill(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "Missing 'description' in frontmatter");
    }

    #[test]
    fn integer_name_is_a_type_mismatch() {
        let dir = skill_dir("---\nname: 42\ndescription: A demo.\n---\n");
        let err = validate_skill(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "Name must be a string, got integer");
    }

    #[test]
    fn sequence_description_is_a_type_mismatch() {
        let dir = skill_dir("---\nname: demo\ndescription:\n  - a\n  - b\n---\n");
        let err = validate_skill(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "Description must be a string, got sequence");
    }

    #[test]
    fn empty_name_is_rejected() {
        let dir = skill_dir("---\nname: \"   \"\ndescription: A demo.\n---\n");
        let err = validate_skill(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "Name must be non-empty");
    }

    #[test]
    fn name_at_limit_passes() {
        let dir = skill_dir(&doc(&"A".repeat(NAME_MAX_LEN), "A demo."));
        assert!(validate_skill(dir.path()).is_ok());
    }

    #[test]
    fn name_over_limit_reports_both_lengths() {
        let dir = skill_dir(&doc(&"A".repeat(101), "A demo."));
        let err = validate_skill(dir.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Name is too long (101 characters). Maximum is 100 characters."
        );
    }

    #[test]
    fn description_over_limit_reports_both_lengths() {
        let dir = skill_dir(&doc("demo", &"D".repeat(501)));
        let err = validate_skill(dir.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Description is too long (501 characters). Maximum is 500 characters."
        );
    }

    #[test]
    fn multiline_description_is_measured_after_collapsing() {
        // "Line one.\n   Line two." collapses to "Line one. Line two."
        let content = "---\nname: demo\ndescription: |\n  Line one.\n     Line two.\n---\n";
        let dir = skill_dir(content);
        assert!(validate_skill(dir.path()).is_ok());
    }

    #[test]
    fn collapsed_length_keeps_an_over_limit_description_over_limit() {
        // 26 words of 19 As plus 25 joining spaces: 519 chars after collapsing.
        let word = "A".repeat(19);
        let blocky = vec![word; 26].join("\n    ");
        let content = format!("---\nname: demo\ndescription: |\n  {}\n---\n", blocky.replace('\n', "\n  "));
        let dir = skill_dir(&content);
        let err = validate_skill(dir.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Description is too long (519 characters). Maximum is 500 characters."
        );
    }

    #[test]
    fn extra_frontmatter_keys_are_allowed() {
        let content =
            "---\nname: demo\ndescription: A demo.\nversion: 1.0.0\ntags:\n  - a\n---\n";
        let dir = skill_dir(content);
        assert!(validate_skill(dir.path()).is_ok());
    }

    #[test]
    fn validation_message_reports_success_text() {
        let dir = skill_dir(&doc("demo", "A demo skill."));
        let (valid, message) = validation_message(dir.path());
        assert!(valid);
        assert_eq!(message, "Skill is valid!");
    }

    #[test]
    fn validation_message_reports_failure_text() {
        let dir = tempfile::tempdir().unwrap();
        let (valid, message) = validation_message(dir.path());
        assert!(!valid);
        assert_eq!(message, "SKILL.md not found");
    }

    #[test]
    fn unicode_length_counts_characters_not_bytes() {
        // 100 two-byte characters is exactly at the limit.
        let dir = skill_dir(&doc(&"é".repeat(NAME_MAX_LEN), "A demo."));
        assert!(validate_skill(dir.path()).is_ok());
    }
}
