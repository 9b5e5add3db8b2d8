use super::PostQueryService;
use crate::{
    application::{
        dto::{Page, PostSummaryDto},
        error::ApplicationResult,
    },
    domain::{
        pagination::parse_page,
        post::{PostListing, PostScope},
    },
};

pub struct ListPostsQuery {
    pub page: Option<String>,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Page<PostSummaryDto>> {
        let listing = PostListing::published(PostScope::All, self.clock.now());
        self.load_page(&listing, parse_page(query.page.as_deref()))
            .await
    }
}
