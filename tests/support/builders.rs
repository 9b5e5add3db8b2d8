// tests/support/builders.rs
use blog_core::domain::post::{Post, PostId, PostSlug, PostTitle};
use blog_core::domain::tag::{Tag, TagId, TagName, TagSlug};
use chrono::Duration;

use super::mocks::{fixed_now, post_repo::StoredPost};

/// `hours_ago` が負なら未来の（未公開の）記事になる
pub fn sample_post(id: i64, title: &str, content: &str, hours_ago: i64) -> StoredPost {
    StoredPost {
        post: Post {
            id: PostId::new(id).unwrap(),
            title: PostTitle::new(title).unwrap(),
            slug: PostSlug::new(format!("post-{id}")).unwrap(),
            content: content.into(),
            created_at: fixed_now() - Duration::hours(hours_ago),
        },
        tags: Vec::new(),
        deleted: false,
    }
}

pub fn tagged(mut stored: StoredPost, slugs: &[&str]) -> StoredPost {
    stored.tags = slugs.iter().map(|slug| TagSlug::new(*slug).unwrap()).collect();
    stored
}

pub fn deleted(mut stored: StoredPost) -> StoredPost {
    stored.deleted = true;
    stored
}

pub fn sample_tag(id: i64, name: &str, slug: &str) -> Tag {
    Tag {
        id: TagId::new(id).unwrap(),
        name: TagName::new(name).unwrap(),
        slug: TagSlug::new(slug).unwrap(),
    }
}
