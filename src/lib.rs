//! Query-normalization core of a Postgres-backed blog.
//!
//! Turns raw request input into structured query material: free-text search
//! into a `tsquery`, comma-separated tag text into resolved tags, and page
//! numbers into clamped limit/offset windows.

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
