//! Transport-agnostic post operations.
//!
//! Both the REST and JSON-RPC adapters call into [`PostService`], so the
//! create/list/get behavior has a single source of truth. The service owns
//! validation and side-effect ordering; persistence and mail delivery are
//! injected through the ports.

use std::sync::Arc;

use crate::domain::{NewPost, Post};
use crate::error::DomainError;
use crate::ports::{Mailer, OutboundEmail, PostRepository};

/// Every created post is announced to this address.
const NOTIFY_RECIPIENT: &str = "admin@blog.local";

/// The three blog operations, independent of transport.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    mailer: Arc<dyn Mailer>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, mailer: Arc<dyn Mailer>) -> Self {
        Self { posts, mailer }
    }

    /// Create a post: validate, insert, notify, then re-read the stored row.
    ///
    /// A mail failure after the insert is reported as an internal error but
    /// the row is NOT rolled back; delivery is best-effort and the post is
    /// already durable at that point.
    pub async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        validate(&input)?;

        let id = self.posts.insert(input.clone()).await?;
        tracing::info!(post_id = id, author = %input.author, "post created");

        self.mailer.send(&notification(&input)).await?;

        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Internal(format!("created post {id} missing on re-read")))
    }

    /// Return all posts, ordered by id ascending.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    /// Look up a single post by id.
    pub async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }
}

/// Reject the create before any store access if a required field is empty.
fn validate(input: &NewPost) -> Result<(), DomainError> {
    for (field, value) in [
        ("title", &input.title),
        ("content", &input.content),
        ("author", &input.author),
    ] {
        if value.is_empty() {
            return Err(DomainError::Validation(format!(
                "{field} is required and must not be empty"
            )));
        }
    }
    Ok(())
}

fn notification(post: &NewPost) -> OutboundEmail {
    OutboundEmail {
        to: NOTIFY_RECIPIENT.to_string(),
        subject: format!("New Post Created: {}", post.title),
        text_body: format!(
            "A new post has been created:\n\nTitle: {}\nAuthor: {}\n\nContent:\n{}",
            post.title, post.author, post.content
        ),
        html_body: format!(
            "<h1>New Post Created</h1>\n\
             <p><strong>Title:</strong> {}</p>\n\
             <p><strong>Author:</strong> {}</p>\n\
             <h2>Content:</h2>\n\
             <p>{}</p>",
            post.title, post.author, post.content
        ),
    }
}
