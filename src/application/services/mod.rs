// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::tags::TagCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::posts::PostQueryService,
    },
    domain::{
        pagination::Paginator,
        post::PostReadRepository,
        search::SearchQueryParser,
        tag::{DefaultTagFactory, TagLookup, TagNormalizer, TagRepository},
    },
};

pub struct ApplicationServices {
    pub post_queries: Arc<PostQueryService>,
    pub tag_commands: Arc<TagCommandService>,
}

impl ApplicationServices {
    /// `tag_lookup` is normally the same store as `tag_repo`, passed separately
    /// so the normalizer only sees the batched lookup.
    pub fn new(
        post_read_repo: Arc<dyn PostReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        tag_lookup: Arc<dyn TagLookup>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        parser: SearchQueryParser,
        paginator: Paginator,
    ) -> Self {
        let normalizer = Arc::new(TagNormalizer::new(
            tag_lookup,
            Arc::new(DefaultTagFactory),
            Arc::clone(&slugger),
        ));

        let tag_commands = Arc::new(TagCommandService::new(
            Arc::clone(&normalizer),
            Arc::clone(&tag_repo),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&tag_repo),
            parser,
            paginator,
            Arc::clone(&clock),
        ));

        Self {
            post_queries,
            tag_commands,
        }
    }
}
