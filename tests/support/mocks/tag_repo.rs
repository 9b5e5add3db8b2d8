// tests/support/mocks/tag_repo.rs
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use blog_core::domain::errors::{DomainError, DomainResult};
use blog_core::domain::tag::{NewTag, Tag, TagId, TagLookup, TagRepository, TagSlug};

/// インメモリタグリポジトリ。一括検索の呼び出し回数を数える。
#[derive(Default)]
pub struct InMemoryTagRepo {
    tags: Mutex<Vec<Arc<Tag>>>,
    lookup_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    fail_on_slug: Option<String>,
}

impl InMemoryTagRepo {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self {
            tags: Mutex::new(tags.into_iter().map(Arc::new).collect()),
            ..Self::default()
        }
    }

    /// 指定スラッグの保存でバッチ全体を失敗させる
    pub fn failing_on(slug: &str) -> Self {
        Self {
            fail_on_slug: Some(slug.to_string()),
            ..Self::default()
        }
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn stored_slugs(&self) -> Vec<String> {
        self.tags
            .lock()
            .unwrap()
            .iter()
            .map(|tag| tag.slug.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl TagLookup for InMemoryTagRepo {
    async fn find_by_slugs(&self, slugs: &[TagSlug]) -> DomainResult<Vec<Arc<Tag>>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|tag| slugs.contains(&tag.slug))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn find_by_slug(&self, slug: &TagSlug) -> DomainResult<Option<Tag>> {
        Ok(self
            .tags
            .lock()
            .unwrap()
            .iter()
            .find(|tag| &tag.slug == slug)
            .map(|tag| tag.as_ref().clone()))
    }

    async fn insert_many(&self, new_tags: Vec<NewTag>) -> DomainResult<Vec<Tag>> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        let mut tags = self.tags.lock().unwrap();

        // トランザクション相当: 全件成功したときだけ反映する
        let mut staged: Vec<Arc<Tag>> = tags.clone();
        let mut stored = Vec::with_capacity(new_tags.len());
        for new_tag in new_tags {
            if self.fail_on_slug.as_deref() == Some(new_tag.slug.as_str()) {
                return Err(DomainError::Persistence("simulated write failure".into()));
            }
            if let Some(existing) = staged.iter().find(|tag| tag.slug == new_tag.slug) {
                stored.push(existing.as_ref().clone());
                continue;
            }
            let created = Tag {
                id: TagId::new(staged.len() as i64 + 1)?,
                name: new_tag.name,
                slug: new_tag.slug,
            };
            staged.push(Arc::new(created.clone()));
            stored.push(created);
        }

        *tags = staged;
        Ok(stored)
    }
}

/// 検索時には存在しないが、保存時には他リクエストが先に保存済みのタグを再現する
pub struct RacingTagRepo {
    pub winner: Tag,
}

#[async_trait]
impl TagLookup for RacingTagRepo {
    async fn find_by_slugs(&self, _slugs: &[TagSlug]) -> DomainResult<Vec<Arc<Tag>>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl TagRepository for RacingTagRepo {
    async fn find_by_slug(&self, slug: &TagSlug) -> DomainResult<Option<Tag>> {
        Ok((&self.winner.slug == slug).then(|| self.winner.clone()))
    }

    async fn insert_many(&self, new_tags: Vec<NewTag>) -> DomainResult<Vec<Tag>> {
        new_tags
            .into_iter()
            .map(|new_tag| {
                if new_tag.slug == self.winner.slug {
                    Ok(self.winner.clone())
                } else {
                    Err(DomainError::Persistence("unexpected tag".into()))
                }
            })
            .collect()
    }
}
