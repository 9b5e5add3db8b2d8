// src/bootstrap.rs
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use crate::config::AppConfig;
use crate::domain::{
    pagination::Paginator,
    post::PostReadRepository,
    search::SearchQueryParser,
    tag::{TagLookup, TagRepository},
};
use crate::infrastructure::{
    database,
    repositories::{PostgresPostReadRepository, PostgresTagRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};

/// Connects to Postgres, applies migrations and wires the services for an
/// embedding application.
pub async fn connect(config: &AppConfig) -> Result<Arc<ApplicationServices>> {
    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("failed to connect to database")?;
    database::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let tags = Arc::new(PostgresTagRepository::new(pool.clone()));
    let tag_repo: Arc<dyn TagRepository> = Arc::clone(&tags) as Arc<dyn TagRepository>;
    let tag_lookup: Arc<dyn TagLookup> = tags;
    let post_read_repo: Arc<dyn PostReadRepository> = Arc::new(PostgresPostReadRepository::new(
        pool,
        config.text_search_config().clone(),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let paginator = Paginator::new(config.page_size())?;

    tracing::info!(
        page_size = config.page_size(),
        charset = %config.search_charset(),
        text_search_config = %config.text_search_config(),
        "blog services ready"
    );

    Ok(Arc::new(ApplicationServices::new(
        post_read_repo,
        tag_repo,
        tag_lookup,
        clock,
        slugger,
        SearchQueryParser::new(config.search_charset()),
        paginator,
    )))
}
