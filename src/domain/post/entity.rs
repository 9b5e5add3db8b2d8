// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// First `max_chars` characters of the content, cut at a word boundary
    /// when one is available.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let content = self.content.trim();
        if content.chars().count() <= max_chars {
            return content.to_string();
        }

        let cut: String = content.chars().take(max_chars).collect();
        let cut = match cut.rfind(char::is_whitespace) {
            Some(idx) if idx > 0 => &cut[..idx],
            _ => cut.as_str(),
        };
        format!("{}…", cut.trim_end())
    }
}
