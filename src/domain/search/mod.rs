// src/domain/search/mod.rs
pub mod query;
pub mod sanitizer;

pub use query::{SearchQuery, SearchToken};
pub use sanitizer::{PHRASE_ADJACENCY, SearchCharset, Sanitizer};

/// Converts free-text search input into a PostgreSQL `tsquery` string.
///
/// Supported syntax:
/// - `"some phrase"` matches the words in sequence
/// - `+word` is required
/// - `-word` is excluded
/// - any other word is optional
///
/// `"some phrase" +required -excluded optional` becomes
/// `"some <-> phrase" & required & optional & !excluded`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchQueryParser {
    sanitizer: Sanitizer,
}

impl SearchQueryParser {
    pub fn new(charset: SearchCharset) -> Self {
        Self {
            sanitizer: Sanitizer::new(charset),
        }
    }

    pub fn tokenize(&self, input: &str) -> SearchQuery {
        SearchQuery::parse(input, &self.sanitizer)
    }

    pub fn parse(&self, input: &str) -> String {
        self.tokenize(input).to_tsquery()
    }
}
