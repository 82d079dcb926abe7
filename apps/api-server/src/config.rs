//! Application configuration loaded from environment variables.

use std::env;

use inkpost_infra::{DatabaseConfig, SmtpConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub smtp: SmtpConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| Self::database_url_from_parts()),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        };

        let smtp = SmtpConfig {
            host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env::var("SMTP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(25),
            from: env::var("SMTP_FROM").unwrap_or_else(|_| "noreply@blog.local".to_string()),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database,
            smtp,
        }
    }

    /// Compose the connection URL from the discrete DB_* variables when
    /// DATABASE_URL is not set outright.
    fn database_url_from_parts() -> String {
        let host = env::var("DB_HOST").unwrap_or_else(|_| "db".to_string());
        let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let user = env::var("DB_USER").unwrap_or_else(|_| "root".to_string());
        let password = env::var("DB_PASSWORD").unwrap_or_else(|_| "example".to_string());
        let name = env::var("DB_NAME").unwrap_or_else(|_| "blog".to_string());

        format!("postgres://{user}:{password}@{host}:{port}/{name}")
    }
}
