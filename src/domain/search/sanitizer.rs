// src/domain/search/sanitizer.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

/// Phrase-adjacency operator ("left is immediately followed by right").
pub const PHRASE_ADJACENCY: &str = " <-> ";

const GERMAN_LETTERS: [char; 7] = ['ä', 'ö', 'ü', 'ß', 'Ä', 'Ö', 'Ü'];

/// Letters a search term may keep after sanitizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchCharset {
    /// ASCII letters plus German umlauts and sharp s.
    #[default]
    German,
    /// Any Unicode alphabetic character.
    Unicode,
}

impl SearchCharset {
    fn allows_letter(self, ch: char) -> bool {
        match self {
            Self::German => ch.is_ascii_alphabetic() || GERMAN_LETTERS.contains(&ch),
            Self::Unicode => ch.is_alphabetic(),
        }
    }

    pub fn allows(self, ch: char) -> bool {
        self.allows_letter(ch) || ch.is_ascii_digit() || ch == '-'
    }
}

impl FromStr for SearchCharset {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "german" | "de" => Ok(Self::German),
            "unicode" => Ok(Self::Unicode),
            other => Err(DomainError::Validation(format!(
                "unknown search charset: {other}"
            ))),
        }
    }
}

impl fmt::Display for SearchCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::German => f.write_str("german"),
            Self::Unicode => f.write_str("unicode"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer {
    charset: SearchCharset,
}

impl Sanitizer {
    pub fn new(charset: SearchCharset) -> Self {
        Self { charset }
    }

    /// Drops every character outside the charset, digits and `-`.
    pub fn sanitize_word(&self, word: &str) -> String {
        word.chars().filter(|ch| self.charset.allows(*ch)).collect()
    }

    /// Like [`Self::sanitize_word`] but keeps word boundaries, which are
    /// rewritten to the phrase-adjacency operator.
    pub fn sanitize_phrase(&self, phrase: &str) -> String {
        let kept: String = phrase
            .chars()
            .filter(|ch| self.charset.allows(*ch) || ch.is_whitespace())
            .collect();

        kept.split_whitespace()
            .collect::<Vec<_>>()
            .join(PHRASE_ADJACENCY)
    }
}
