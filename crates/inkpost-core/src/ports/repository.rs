use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post repository.
///
/// Posts are append-only, so the surface is insert plus reads. The store
/// assigns ids and creation timestamps; `insert` returns the generated id so
/// the caller can re-read the full row.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post and return the store-assigned id.
    async fn insert(&self, post: NewPost) -> Result<i64, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Return all posts, ordered by id ascending.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;
}
