//! Domain entities.

mod post;

pub use post::{NewPost, Post};
