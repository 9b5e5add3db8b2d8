// src/domain/tag/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{NewTag, Tag};
use crate::domain::tag::value_objects::{TagName, TagSlug};
use async_trait::async_trait;
use std::sync::Arc;

/// Batched resolution of stored tags by slug. Unknown slugs are simply absent
/// from the result.
#[async_trait]
pub trait TagLookup: Send + Sync {
    async fn find_by_slugs(&self, slugs: &[TagSlug]) -> DomainResult<Vec<Arc<Tag>>>;
}

#[async_trait]
pub trait TagRepository: TagLookup {
    async fn find_by_slug(&self, slug: &TagSlug) -> DomainResult<Option<Tag>>;

    /// Stores `tags` atomically: on error nothing from the batch is kept.
    /// A slug that another writer stored in the meantime comes back as that
    /// stored row. Result order is unspecified.
    async fn insert_many(&self, tags: Vec<NewTag>) -> DomainResult<Vec<Tag>>;
}

pub trait TagFactory: Send + Sync {
    fn create(&self, name: TagName, slug: TagSlug) -> NewTag;
}

#[derive(Debug, Default, Clone)]
pub struct DefaultTagFactory;

impl TagFactory for DefaultTagFactory {
    fn create(&self, name: TagName, slug: TagSlug) -> NewTag {
        NewTag { name, slug }
    }
}
