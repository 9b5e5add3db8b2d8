// tests/support/helpers.rs
use std::sync::Arc;

use blog_core::application::ports::{time::Clock, util::SlugGenerator};
use blog_core::application::services::ApplicationServices;
use blog_core::domain::{
    pagination::Paginator,
    post::PostReadRepository,
    search::SearchQueryParser,
    tag::{TagLookup, TagRepository},
};
use blog_core::infrastructure::util::DefaultSlugGenerator;

use super::mocks::{FixedClock, InMemoryPostRepo};

/// モックを使ってサービス一式を組み立てる
pub fn build_services<T>(
    posts: Arc<InMemoryPostRepo>,
    tags: Arc<T>,
    page_size: u32,
) -> ApplicationServices
where
    T: TagRepository + 'static,
{
    let post_repo: Arc<dyn PostReadRepository> = posts;
    let tag_repo: Arc<dyn TagRepository> = Arc::clone(&tags) as Arc<dyn TagRepository>;
    let tag_lookup: Arc<dyn TagLookup> = tags;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    ApplicationServices::new(
        post_repo,
        tag_repo,
        tag_lookup,
        clock,
        slugger,
        SearchQueryParser::default(),
        Paginator::new(page_size).unwrap(),
    )
}
