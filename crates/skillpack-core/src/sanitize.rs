//! Whitespace normalization for frontmatter field values.
//!
//! Skill discovery renders `name` and `description` on a single line, so
//! length limits are enforced against the one-line form. The same
//! normalization must be applied anywhere the values are displayed to keep
//! the limits consistent with what users see.

/// Collapse every run of whitespace (including newlines) into a single
/// space and trim both ends.
///
/// YAML block scalars routinely carry embedded newlines and indentation;
/// a multi-line description is measured by its collapsed length, not its
/// raw length.
pub fn sanitize_one_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
