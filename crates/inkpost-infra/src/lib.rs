//! # Inkpost Infrastructure
//!
//! Concrete implementations of the ports defined in `inkpost-core`:
//! PostgreSQL persistence via SeaORM, SMTP delivery via lettre, and the
//! retrying database startup routine.

pub mod database;
pub mod mail;
pub mod retry;

pub use database::{DatabaseConfig, PostgresPostRepository, initialize};
pub use mail::{SmtpConfig, SmtpMailer};
pub use retry::RetryPolicy;
