use std::sync::Arc;

use crate::{
    application::{
        dto::{Page, PostSummaryDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        pagination::Paginator,
        post::{PostListing, PostReadRepository},
        search::SearchQueryParser,
        tag::TagRepository,
    },
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) parser: SearchQueryParser,
    pub(super) paginator: Paginator,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        parser: SearchQueryParser,
        paginator: Paginator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            tag_repo,
            parser,
            paginator,
            clock,
        }
    }

    /// Counts the listing, clamps the requested page against that count and
    /// loads the matching slice.
    pub(super) async fn load_page(
        &self,
        listing: &PostListing,
        requested_page: i64,
    ) -> ApplicationResult<Page<PostSummaryDto>> {
        let total = self.read_repo.count(listing).await?;
        let pagination = self.paginator.paginate(requested_page, total, None)?;

        tracing::debug!(
            total,
            page = pagination.page,
            offset = pagination.offset,
            "paginated post listing"
        );

        let posts = if total == 0 {
            Vec::new()
        } else {
            self.read_repo
                .find_page(listing, pagination.limit, pagination.offset)
                .await?
        };

        Ok(Page::new(
            posts.into_iter().map(Into::into).collect(),
            pagination,
        ))
    }
}
