use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{pagination::Page, tags::TagDto};

const EXCERPT_CHARS: usize = 280;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostSummaryDto {
    fn from(post: Post) -> Self {
        let excerpt = post.excerpt(EXCERPT_CHARS);
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            excerpt,
            created_at: post.created_at,
        }
    }
}

/// `page` is `None` when the query was blank and nothing was searched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultsDto {
    pub query: String,
    pub page: Option<Page<PostSummaryDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedPostsDto {
    pub tag: TagDto,
    pub page: Page<PostSummaryDto>,
}
