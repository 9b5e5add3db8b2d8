// src/domain/tag/services.rs
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{Tag, TagRef};
use crate::domain::tag::repository::{TagFactory, TagLookup};
use crate::domain::tag::value_objects::{TagName, TagSlug};

/// Splits comma-separated tag input into unique names.
///
/// Pieces are trimmed and blanks dropped. Names differing only by case are
/// merged, keeping the first spelling and the input order.
pub fn parse_tag_input(input: &str) -> Vec<TagName> {
    let mut seen = HashSet::new();

    input
        .split(',')
        .filter_map(|piece| TagName::new(piece).ok())
        .filter(|name| seen.insert(name.comparison_key()))
        .collect()
}

/// Domain service turning raw tag input into resolved or pending tags.
pub struct TagNormalizer {
    lookup: Arc<dyn TagLookup>,
    factory: Arc<dyn TagFactory>,
    slugger: Arc<dyn SlugGenerator>,
}

impl TagNormalizer {
    pub fn new(
        lookup: Arc<dyn TagLookup>,
        factory: Arc<dyn TagFactory>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            lookup,
            factory,
            slugger,
        }
    }

    /// Resolves each unique name against stored tags with a single batched
    /// lookup. Names whose slug is already stored reuse that tag; the rest come
    /// back as [`TagRef::Pending`] for the caller to persist.
    pub async fn process_tag_input(&self, input: &str) -> DomainResult<Vec<TagRef>> {
        let candidates = self.slug_names(parse_tag_input(input));
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let slugs: Vec<TagSlug> = candidates.iter().map(|(_, slug)| slug.clone()).collect();
        let existing = self.existing_by_slug(&slugs).await?;

        let resolved: Vec<TagRef> = candidates
            .into_iter()
            .map(|(name, slug)| match existing.get(&slug) {
                Some(tag) => TagRef::Existing(Arc::clone(tag)),
                None => TagRef::Pending(self.factory.create(name, slug)),
            })
            .collect();

        tracing::debug!(
            total = resolved.len(),
            pending = resolved.iter().filter(|tag| tag.is_pending()).count(),
            "normalized tag input"
        );

        Ok(resolved)
    }

    // Names without a usable slug are skipped, as are names colliding with an
    // earlier slug, so the result never holds two references to one tag.
    fn slug_names(&self, names: Vec<TagName>) -> Vec<(TagName, TagSlug)> {
        let mut seen = HashSet::new();

        names
            .into_iter()
            .filter_map(|name| {
                let slug = TagSlug::new(self.slugger.slugify(name.as_str())).ok()?;
                seen.insert(slug.clone()).then_some((name, slug))
            })
            .collect()
    }

    async fn existing_by_slug(&self, slugs: &[TagSlug]) -> DomainResult<HashMap<TagSlug, Arc<Tag>>> {
        let tags = self.lookup.find_by_slugs(slugs).await?;
        Ok(tags
            .into_iter()
            .map(|tag| (tag.slug.clone(), tag))
            .collect())
    }
}
