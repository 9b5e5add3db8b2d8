// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::Post;
use crate::domain::tag::TagSlug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostScope {
    All,
    Tag(TagSlug),
    /// Pre-rendered `tsquery` text.
    FullText(String),
}

/// Filter shared by the count and page queries of one listing, so both see
/// the same rows.
#[derive(Debug, Clone)]
pub struct PostListing {
    pub scope: PostScope,
    pub published_only: bool,
    pub now: DateTime<Utc>,
}

impl PostListing {
    pub fn published(scope: PostScope, now: DateTime<Utc>) -> Self {
        Self {
            scope,
            published_only: true,
            now,
        }
    }
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn count(&self, listing: &PostListing) -> DomainResult<u64>;
    /// Newest first.
    async fn find_page(
        &self,
        listing: &PostListing,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<Post>>;
}
