//! Schema-of-record bootstrap.
//!
//! The posts table is created in-process at startup rather than through a
//! separate migration step, so a fresh database becomes usable as soon as it
//! accepts connections. Creation is idempotent; the startup routine retries
//! it until the database is reachable or the retry policy is exhausted.

use sea_orm::{ConnectionTrait, DbConn, DbErr, Statement};

use super::connections::{DatabaseConfig, connect};
use crate::retry::{RetryPolicy, retry};

const CREATE_POSTS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS posts (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    author TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

/// Create the posts table if it does not exist yet.
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        CREATE_POSTS_TABLE,
    ))
    .await?;
    tracing::info!("database schema ready");
    Ok(())
}

/// Connect and ensure the schema, retrying the whole sequence under the
/// given policy. Callers treat an error here as fatal; request handling
/// must not start before this returns.
pub async fn initialize(config: &DatabaseConfig, policy: &RetryPolicy) -> Result<DbConn, DbErr> {
    retry(policy, || async {
        let db = connect(config).await?;
        ensure_schema(&db).await?;
        Ok(db)
    })
    .await
}
