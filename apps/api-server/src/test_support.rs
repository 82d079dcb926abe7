//! In-memory fakes backing the handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use inkpost_core::PostService;
use inkpost_core::domain::{NewPost, Post};
use inkpost_core::error::{MailError, RepoError};
use inkpost_core::ports::{Mailer, OutboundEmail, PostRepository};

use crate::state::AppState;

#[derive(Default)]
struct MemoryRepo {
    rows: Mutex<Vec<Post>>,
}

#[async_trait]
impl PostRepository for MemoryRepo {
    async fn insert(&self, post: NewPost) -> Result<i64, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.last().map(|p| p.id + 1).unwrap_or(1);
        rows.push(Post {
            id,
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

/// Repository whose store is unreachable: every call fails.
struct FailingRepo;

#[async_trait]
impl PostRepository for FailingRepo {
    async fn insert(&self, _post: NewPost) -> Result<i64, RepoError> {
        Err(RepoError::Query("relation \"posts\" is gone".to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Query("relation \"posts\" is gone".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Err(RepoError::Query("relation \"posts\" is gone".to_string()))
    }
}

struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, _email: &OutboundEmail) -> Result<(), MailError> {
        Ok(())
    }
}

struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &OutboundEmail) -> Result<(), MailError> {
        Err(MailError::Transport("connection refused".to_string()))
    }
}

/// Fresh state over an empty in-memory store and a mailer that accepts
/// everything.
pub fn test_state() -> AppState {
    AppState {
        posts: PostService::new(Arc::new(MemoryRepo::default()), Arc::new(NoopMailer)),
    }
}

/// State whose mailer rejects every send.
pub fn failing_mail_state() -> AppState {
    AppState {
        posts: PostService::new(Arc::new(MemoryRepo::default()), Arc::new(FailingMailer)),
    }
}

/// State whose store fails every query.
pub fn failing_store_state() -> AppState {
    AppState {
        posts: PostService::new(Arc::new(FailingRepo), Arc::new(NoopMailer)),
    }
}
