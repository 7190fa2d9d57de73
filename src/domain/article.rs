use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Id carried by an article that the store has not persisted yet.
pub const UNSAVED_ID: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn new(author_id: &str, title: &str, content: &str) -> Self {
        let now = Utc::now();
        Self {
            id: UNSAVED_ID,
            author_id: author_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}
