//! Ports - trait interfaces implemented by the infrastructure layer.

mod mailer;
mod repository;

pub use mailer::{Mailer, OutboundEmail};
pub use repository::PostRepository;
