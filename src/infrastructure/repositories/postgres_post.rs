// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    Post, PostId, PostListing, PostReadRepository, PostScope, PostSlug, PostTitle,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::fmt;

const POST_COLUMNS: &str = "p.id, p.title, p.slug, p.content, p.created_at";

/// Name of a Postgres text-search configuration such as `german` or
/// `simple`. Restricted to `[a-z_]` because it is written into SQL verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSearchConfig(String);

impl TextSearchConfig {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let valid = !value.is_empty()
            && value
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch == '_');
        valid.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TextSearchConfig {
    fn default() -> Self {
        Self("german".into())
    }
}

impl fmt::Display for TextSearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
    text_config: TextSearchConfig,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool, text_config: TextSearchConfig) -> Self {
        Self { pool, text_config }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            content: row.content,
            created_at: row.created_at,
        })
    }
}

fn push_source(builder: &mut QueryBuilder<'_, Postgres>, listing: &PostListing) {
    builder.push(" FROM blog_post p");
    if matches!(listing.scope, PostScope::Tag(_)) {
        builder.push(
            " INNER JOIN blog_post_tag pt ON pt.post_id = p.id INNER JOIN blog_tag t ON t.id = pt.tag_id",
        );
    }
}

fn push_clause(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    if *has_where {
        builder.push(" AND ");
    } else {
        builder.push(" WHERE ");
        *has_where = true;
    }
}

fn apply_conditions<'a>(
    builder: &mut QueryBuilder<'a, Postgres>,
    listing: &'a PostListing,
    text_config: &TextSearchConfig,
) {
    let mut has_where = false;

    if listing.published_only {
        push_clause(builder, &mut has_where);
        builder.push("p.is_deleted = FALSE AND p.created_at <= ");
        builder.push_bind(listing.now);
    }

    match &listing.scope {
        PostScope::All => {}
        PostScope::Tag(slug) => {
            push_clause(builder, &mut has_where);
            builder.push("t.slug = ");
            builder.push_bind(slug.as_str());
        }
        PostScope::FullText(query) => {
            push_clause(builder, &mut has_where);
            builder.push(format_args!(
                "to_tsvector('{cfg}', p.title || ' ' || p.content) @@ to_tsquery('{cfg}', ",
                cfg = text_config.as_str()
            ));
            builder.push_bind(query.as_str());
            builder.push(")");
        }
    }
}

fn count_query<'a>(
    listing: &'a PostListing,
    text_config: &TextSearchConfig,
) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*)");
    push_source(&mut builder, listing);
    apply_conditions(&mut builder, listing, text_config);
    builder
}

fn page_query<'a>(
    listing: &'a PostListing,
    text_config: &TextSearchConfig,
    limit: i64,
    offset: i64,
) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::new("SELECT ");
    builder.push(POST_COLUMNS);
    push_source(&mut builder, listing);
    apply_conditions(&mut builder, listing, text_config);
    builder.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);
    builder
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn count(&self, listing: &PostListing) -> DomainResult<u64> {
        let mut builder = count_query(listing, &self.text_config);
        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(count)
            .map_err(|_| DomainError::Persistence(format!("negative row count: {count}")))
    }

    async fn find_page(
        &self,
        listing: &PostListing,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<Post>> {
        let offset = i64::try_from(offset)
            .map_err(|_| DomainError::InvalidArgument(format!("offset out of range: {offset}")))?;

        let mut builder = page_query(listing, &self.text_config, i64::from(limit), offset);
        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        tracing::debug!(rows = rows.len(), limit, offset, "fetched post page");

        rows.into_iter().map(Post::try_from).collect()
    }
}
