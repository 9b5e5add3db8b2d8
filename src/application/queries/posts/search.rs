use super::PostQueryService;
use crate::{
    application::{
        dto::{Page, SearchResultsDto},
        error::ApplicationResult,
    },
    domain::{
        pagination::parse_page,
        post::{PostListing, PostScope},
    },
};

pub struct SearchPostsQuery {
    pub q: String,
    pub page: Option<String>,
}

impl PostQueryService {
    pub async fn search_posts(&self, query: SearchPostsQuery) -> ApplicationResult<SearchResultsDto> {
        let raw = query.q.trim();
        if raw.is_empty() {
            return Ok(SearchResultsDto {
                query: String::new(),
                page: None,
            });
        }

        let requested_page = parse_page(query.page.as_deref());
        let ts_query = self.parser.parse(raw);
        tracing::debug!(raw, ts_query = %ts_query, "parsed search query");

        // Input that sanitized away entirely would only make to_tsquery complain.
        let page = if ts_query.is_empty() {
            let pagination = self.paginator.paginate(requested_page, 0, None)?;
            Page::new(Vec::new(), pagination)
        } else {
            let listing = PostListing::published(PostScope::FullText(ts_query), self.clock.now());
            self.load_page(&listing, requested_page).await?
        };

        Ok(SearchResultsDto {
            query: raw.to_string(),
            page: Some(page),
        })
    }
}
