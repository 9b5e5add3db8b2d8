// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_post;
mod postgres_tag;

pub(crate) use error::map_sqlx;
pub use postgres_post::{PostgresPostReadRepository, TextSearchConfig};
pub use postgres_tag::PostgresTagRepository;
