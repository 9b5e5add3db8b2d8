// tests/support/mocks/post_repo.rs
use std::sync::Mutex;

use async_trait::async_trait;
use blog_core::domain::errors::DomainResult;
use blog_core::domain::post::{Post, PostListing, PostReadRepository, PostScope};
use blog_core::domain::tag::TagSlug;

/// 保存済み記事とそのタグ、削除フラグ
#[derive(Clone)]
pub struct StoredPost {
    pub post: Post,
    pub tags: Vec<TagSlug>,
    pub deleted: bool,
}

/// インメモリ記事リポジトリ。受け取った検索条件を記録する。
#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<Vec<StoredPost>>,
    pub listings: Mutex<Vec<PostListing>>,
}

impl InMemoryPostRepo {
    pub fn new(posts: Vec<StoredPost>) -> Self {
        Self {
            posts: Mutex::new(posts),
            listings: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_scopes(&self) -> Vec<PostScope> {
        self.listings
            .lock()
            .unwrap()
            .iter()
            .map(|listing| listing.scope.clone())
            .collect()
    }

    fn matching(&self, listing: &PostListing) -> Vec<Post> {
        self.listings.lock().unwrap().push(listing.clone());

        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|stored| {
                !listing.published_only
                    || (!stored.deleted && stored.post.created_at <= listing.now)
            })
            .filter(|stored| match &listing.scope {
                PostScope::All => true,
                PostScope::Tag(slug) => stored.tags.contains(slug),
                PostScope::FullText(query) => matches_tsquery(&stored.post, query),
            })
            .map(|stored| stored.post.clone())
            .collect();

        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        posts
    }
}

// Rough stand-in for Postgres: every positive term must occur, no negated one may.
fn matches_tsquery(post: &Post, query: &str) -> bool {
    let haystack = format!("{} {}", post.title.as_str(), post.content).to_lowercase();
    query.split(" & ").all(|segment| {
        let segment = segment.trim_matches('"').replace(" <-> ", " ").to_lowercase();
        match segment.strip_prefix('!') {
            Some(term) => !haystack.contains(term),
            None => haystack.contains(&segment),
        }
    })
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn count(&self, listing: &PostListing) -> DomainResult<u64> {
        Ok(self.matching(listing).len() as u64)
    }

    async fn find_page(
        &self,
        listing: &PostListing,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<Post>> {
        Ok(self
            .matching(listing)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}
