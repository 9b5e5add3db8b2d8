use super::PostQueryService;
use crate::{
    application::{
        dto::TaggedPostsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        pagination::parse_page,
        post::{PostListing, PostScope},
        tag::TagSlug,
    },
};

pub struct ListPostsByTagQuery {
    pub slug: String,
    pub page: Option<String>,
}

impl PostQueryService {
    pub async fn list_posts_by_tag(
        &self,
        query: ListPostsByTagQuery,
    ) -> ApplicationResult<TaggedPostsDto> {
        // A blank route segment names no tag at all.
        let slug =
            TagSlug::new(query.slug).map_err(|_| ApplicationError::not_found("tag not found"))?;
        let tag = self
            .tag_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let listing = PostListing::published(PostScope::Tag(slug), self.clock.now());
        let page = self
            .load_page(&listing, parse_page(query.page.as_deref()))
            .await?;

        Ok(TaggedPostsDto {
            tag: tag.into(),
            page,
        })
    }
}
