// src/application/ports/util.rs

/// Derives the lowercase, URL-safe lookup key for a display name.
///
/// Implementations may return an empty string when nothing usable remains.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
