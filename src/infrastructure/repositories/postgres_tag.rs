// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{NewTag, Tag, TagId, TagLookup, TagName, TagRepository, TagSlug};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashSet;
use std::sync::Arc;

const TAG_COLUMNS: &str = "id, name, slug";

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
            slug: TagSlug::new(row.slug)?,
        })
    }
}

fn insert_query(tags: &[NewTag]) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("INSERT INTO blog_tag (name, slug) ");
    builder.push_values(tags, |mut row, tag| {
        row.push_bind(tag.name.as_str().to_owned())
            .push_bind(tag.slug.as_str().to_owned());
    });
    builder.push(" ON CONFLICT (slug) DO NOTHING RETURNING ");
    builder.push(TAG_COLUMNS);
    builder
}

#[async_trait]
impl TagLookup for PostgresTagRepository {
    async fn find_by_slugs(&self, slugs: &[TagSlug]) -> DomainResult<Vec<Arc<Tag>>> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let slugs: Vec<String> = slugs.iter().map(|slug| slug.as_str().to_owned()).collect();
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, slug FROM blog_tag WHERE slug = ANY($1)",
        )
        .bind(slugs)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| Tag::try_from(row).map(Arc::new))
            .collect()
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_slug(&self, slug: &TagSlug) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name, slug FROM blog_tag WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn insert_many(&self, tags: Vec<NewTag>) -> DomainResult<Vec<Tag>> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder = insert_query(&tags);
        let mut rows = builder
            .build_query_as::<TagRow>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        // Rows skipped by ON CONFLICT were committed by another writer.
        let inserted: HashSet<&str> = rows.iter().map(|row| row.slug.as_str()).collect();
        let skipped: Vec<String> = tags
            .iter()
            .map(|tag| tag.slug.as_str())
            .filter(|slug| !inserted.contains(slug))
            .map(str::to_owned)
            .collect();

        if !skipped.is_empty() {
            let existing = sqlx::query_as::<_, TagRow>(
                "SELECT id, name, slug FROM blog_tag WHERE slug = ANY($1)",
            )
            .bind(skipped)
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;
            rows.extend(existing);
        }

        tx.commit().await.map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}
