use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - an immutable blog entry.
///
/// Posts are only ever created; there is no update or delete anywhere in the
/// system. `id` and `created_at` are assigned by the store at insertion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a post, before the store has assigned an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}
