//! # Inkpost API Server
//!
//! The main entry point for the Actix-web HTTP server exposing the blog
//! operations over REST and JSON-RPC.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;

#[cfg(test)]
mod test_support;

use config::AppConfig;
use inkpost_core::PostService;
use inkpost_infra::{PostgresPostRepository, RetryPolicy, SmtpMailer, initialize};
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Inkpost API server on {}:{}",
        config.host,
        config.port
    );

    // The schema-of-record must exist before the listener binds. The
    // initializer retries on a fixed interval while the database comes up;
    // exhaustion is fatal.
    let db = match initialize(&config.database, &RetryPolicy::default()).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("database initialization failed after all retries: {e}");
            std::process::exit(1);
        }
    };

    let mailer = match SmtpMailer::new(&config.smtp) {
        Ok(mailer) => mailer,
        Err(e) => {
            tracing::error!("invalid SMTP configuration: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState {
        posts: PostService::new(
            Arc::new(PostgresPostRepository::new(db)),
            Arc::new(mailer),
        ),
    };

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    // LOG_VERBOSE selects the chatty default filter; an explicit RUST_LOG
    // still wins over both defaults.
    let verbose = std::env::var("LOG_VERBOSE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let default_filter = if verbose {
        "debug,sqlx=info"
    } else {
        "info"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
