// src/domain/tag/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

/// Display name of a tag, kept in the casing the user first typed.
///
/// Any non-blank text is a name. The column width is only enforced when a
/// new tag is stored, see [`ensure_fits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName(String);

impl TagName {
    /// Width of `blog_tag.name`, in characters.
    pub const MAX_LEN: usize = 100;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("tag name cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison key. Never persisted.
    pub fn comparison_key(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagSlug(String);

impl TagSlug {
    /// Width of `blog_tag.slug`, in characters.
    pub const MAX_LEN: usize = 100;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TagSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejects `value` when it is wider than a column of `max_len` characters.
pub fn ensure_fits(field: &str, value: &str, max_len: usize) -> DomainResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(DomainError::Validation(format!(
            "tag {field} cannot exceed {max_len} characters, got {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_keeps_casing() {
        let name = TagName::new("  JavaScript ").unwrap();
        assert_eq!(name.as_str(), "JavaScript");
        assert_eq!(name.comparison_key(), "javascript");
    }

    #[test]
    fn only_blank_names_are_rejected() {
        assert!(TagName::new("   ").is_err());
        let long = TagName::new("x".repeat(TagName::MAX_LEN + 1)).unwrap();
        assert_eq!(long.as_str().len(), TagName::MAX_LEN + 1);
    }

    #[test]
    fn width_is_counted_in_characters() {
        assert!(ensure_fits("name", &"ß".repeat(TagName::MAX_LEN), TagName::MAX_LEN).is_ok());
        let err = ensure_fits("slug", &"s".repeat(TagSlug::MAX_LEN + 1), TagSlug::MAX_LEN)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("slug")));
    }

    #[test]
    fn ids_and_slugs_are_validated() {
        assert!(TagId::new(0).is_err());
        assert_eq!(i64::from(TagId::new(7).unwrap()), 7);
        assert!(TagSlug::new("").is_err());
    }
}
