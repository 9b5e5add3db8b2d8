// src/domain/search/query.rs
use super::sanitizer::Sanitizer;
use regex::Regex;
use std::sync::LazyLock;

static PHRASE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("hardcoded phrase pattern is valid"));

const AND: &str = " & ";
const NOT: char = '!';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchToken {
    Phrase(String),
    Required(String),
    Excluded(String),
    Optional(String),
}

impl SearchToken {
    fn classify(raw: &str, sanitizer: &Sanitizer) -> Self {
        if let Some(word) = raw.strip_prefix('+') {
            Self::Required(sanitizer.sanitize_word(word))
        } else if let Some(word) = raw.strip_prefix('-') {
            Self::Excluded(sanitizer.sanitize_word(word))
        } else {
            Self::Optional(sanitizer.sanitize_word(raw))
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Phrase(text) | Self::Required(text) | Self::Excluded(text) | Self::Optional(text) => {
                text
            }
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Phrase(_) => 0,
            Self::Required(_) => 1,
            Self::Optional(_) => 2,
            Self::Excluded(_) => 3,
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Phrase(text) => format!("\"{text}\""),
            Self::Excluded(text) => format!("{NOT}{text}"),
            Self::Required(text) | Self::Optional(text) => text.clone(),
        }
    }
}

/// Tokenized user search input, in order of appearance within each kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    tokens: Vec<SearchToken>,
}

impl SearchQuery {
    pub fn parse(input: &str, sanitizer: &Sanitizer) -> Self {
        let mut tokens = Vec::new();
        let mut remainder = String::with_capacity(input.len());
        let mut last = 0;

        for captures in PHRASE_PATTERN.captures_iter(input) {
            let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            tokens.push(SearchToken::Phrase(sanitizer.sanitize_phrase(inner.as_str())));
            remainder.push_str(&input[last..whole.start()]);
            last = whole.end();
        }
        remainder.push_str(&input[last..]);

        tokens.extend(
            remainder
                .split_whitespace()
                .map(|raw| SearchToken::classify(raw, sanitizer)),
        );

        Self { tokens }
    }

    pub fn tokens(&self) -> &[SearchToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.iter().all(|token| token.text().is_empty())
    }

    /// Renders a PostgreSQL `tsquery`: phrases, required, optional, then
    /// excluded terms, joined by `&`. Tokens that sanitized away are skipped.
    pub fn to_tsquery(&self) -> String {
        let mut ordered: Vec<&SearchToken> = self
            .tokens
            .iter()
            .filter(|token| !token.text().is_empty())
            .collect();
        ordered.sort_by_key(|token| token.rank());

        ordered
            .into_iter()
            .map(SearchToken::render)
            .collect::<Vec<_>>()
            .join(AND)
    }
}
