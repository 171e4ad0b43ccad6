//! Frontmatter extraction and parsing for `SKILL.md`.
//!
//! A skill document looks like:
//!
//! ```text
//! ---
//! name: my-skill
//! description: Does something useful.
//! ---
//!
//! # My Skill
//!
//! Instructions go here...
//! ```
//!
//! Only the block between the `---` delimiter lines is parsed; everything
//! after the closing delimiter is free-form documentation and is ignored.

use crate::error::ValidationError;

/// Extract the raw frontmatter text from a skill document.
///
/// The document must begin with `---` and its first line must be exactly
/// `---` once trimmed; the block ends at the next line that trims to
/// `---`. Returns `None` when either delimiter is missing.
pub fn extract_frontmatter(content: &str) -> Option<String> {
    if !content.starts_with("---") {
        return None;
    }

    let lines: Vec<&str> = content.lines().collect();
    if lines.first().map(|l| l.trim()) != Some("---") {
        return None;
    }

    for (idx, line) in lines.iter().enumerate().skip(1) {
        if line.trim() == "---" {
            return Some(lines[1..idx].join("\n"));
        }
    }
    None
}

/// Parse a skill document's frontmatter into a YAML mapping.
///
/// Fails with [`ValidationError::InvalidFrontmatter`] when the delimiters
/// are missing, [`ValidationError::YamlParse`] when the block is not valid
/// YAML, and [`ValidationError::NotADictionary`] when it parses to a
/// scalar or sequence. An empty block parses to YAML null and is rejected
/// as a non-dictionary.
pub fn parse_frontmatter(content: &str) -> Result<serde_yaml::Mapping, ValidationError> {
    let block = extract_frontmatter(content).ok_or(ValidationError::InvalidFrontmatter)?;
    // An empty block is YAML null, not a mapping.
    if block.trim().is_empty() {
        return Err(ValidationError::NotADictionary);
    }
    let value: serde_yaml::Value = serde_yaml::from_str(&block)?;
    match value {
        serde_yaml::Value::Mapping(mapping) => Ok(mapping),
        _ => Err(ValidationError::NotADictionary),
    }
}

/// YAML type name of a value, for type-mismatch messages.
pub fn yaml_type_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(n) if n.is_f64() => "float",
        serde_yaml::Value::Number(_) => "integer",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}
