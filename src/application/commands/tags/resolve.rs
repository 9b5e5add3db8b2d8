use std::collections::HashMap;

use super::TagCommandService;
use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        tag::{NewTag, Tag, TagRef, TagSlug},
    },
};

/// Raw comma-separated tag text as typed into the post form.
pub struct ResolveTagsCommand {
    pub input: String,
}

impl TagCommandService {
    /// Normalizes the input and stores every tag that does not exist yet in a
    /// single batch. The result follows input order.
    pub async fn resolve_tags(&self, command: ResolveTagsCommand) -> ApplicationResult<Vec<TagDto>> {
        let resolved = self.normalizer.process_tag_input(&command.input).await?;

        let pending: Vec<NewTag> = resolved
            .iter()
            .filter_map(|tag_ref| match tag_ref {
                TagRef::Pending(new_tag) => Some(new_tag.clone()),
                TagRef::Existing(_) => None,
            })
            .collect();
        let mut created = self.persist(pending).await?;

        resolved
            .into_iter()
            .map(|tag_ref| match tag_ref {
                TagRef::Existing(tag) => Ok(TagDto::from(tag.as_ref())),
                TagRef::Pending(new_tag) => created
                    .remove(&new_tag.slug)
                    .map(TagDto::from)
                    .ok_or_else(|| {
                        ApplicationError::from(DomainError::Persistence(format!(
                            "stored batch is missing tag {}",
                            new_tag.slug
                        )))
                    }),
            })
            .collect()
    }

    async fn persist(&self, pending: Vec<NewTag>) -> ApplicationResult<HashMap<TagSlug, Tag>> {
        if pending.is_empty() {
            return Ok(HashMap::new());
        }
        for new_tag in &pending {
            new_tag.ensure_storable()?;
        }

        let stored = self.tag_repo.insert_many(pending).await?;
        tracing::info!(
            count = stored.len(),
            slugs = ?stored.iter().map(|tag| tag.slug.as_str()).collect::<Vec<_>>(),
            "stored new tags"
        );

        Ok(stored
            .into_iter()
            .map(|tag| (tag.slug.clone(), tag))
            .collect())
    }
}
