//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use inkpost_core::domain::Post;
use serde::{Deserialize, Serialize};

/// Request to create a new post. Used verbatim as the `createPost` JSON-RPC
/// params object and the `POST /api/posts` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

/// A post as returned by the REST surface and `listPosts`/`getPost`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: post.created_at,
        }
    }
}

/// The `createPost` JSON-RPC result: the submitted fields echoed back with
/// the store-assigned id, without the creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreated {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl From<Post> for PostCreated {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
        }
    }
}
