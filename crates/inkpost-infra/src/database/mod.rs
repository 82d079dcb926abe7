//! Database connection management, schema bootstrap, and the Postgres
//! repository.

mod connections;
pub mod entity;
mod postgres_repo;
mod schema;

pub use connections::{DatabaseConfig, connect};
pub use postgres_repo::PostgresPostRepository;
pub use schema::{ensure_schema, initialize};

#[cfg(test)]
mod tests;
