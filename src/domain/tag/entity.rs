// src/domain/tag/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::tag::value_objects::{TagId, TagName, TagSlug, ensure_fits};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub slug: TagSlug,
}

/// A tag that has been named and slugged but not stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: TagName,
    pub slug: TagSlug,
}

impl NewTag {
    /// Checks name and slug against the `blog_tag` column widths. A slug can
    /// outgrow its name through transliteration (`ß` becomes `ss`).
    pub fn ensure_storable(&self) -> DomainResult<()> {
        ensure_fits("name", self.name.as_str(), TagName::MAX_LEN)?;
        ensure_fits("slug", self.slug.as_str(), TagSlug::MAX_LEN)
    }
}

/// Outcome of resolving one tag name against the store.
#[derive(Debug, Clone)]
pub enum TagRef {
    /// Shares the instance handed out by the lookup.
    Existing(Arc<Tag>),
    /// Must be persisted by the caller.
    Pending(NewTag),
}

impl TagRef {
    pub fn name(&self) -> &TagName {
        match self {
            Self::Existing(tag) => &tag.name,
            Self::Pending(tag) => &tag.name,
        }
    }

    pub fn slug(&self) -> &TagSlug {
        match self {
            Self::Existing(tag) => &tag.slug,
            Self::Pending(tag) => &tag.slug,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}
