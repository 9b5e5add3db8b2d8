// src/domain/mod.rs
pub mod errors;
pub mod pagination;
pub mod post;
pub mod search;
pub mod tag;
