use std::sync::Arc;

use crate::domain::tag::{TagNormalizer, TagRepository};

pub struct TagCommandService {
    pub(super) normalizer: Arc<TagNormalizer>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
}

impl TagCommandService {
    pub fn new(normalizer: Arc<TagNormalizer>, tag_repo: Arc<dyn TagRepository>) -> Self {
        Self {
            normalizer,
            tag_repo,
        }
    }
}
