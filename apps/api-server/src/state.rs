//! Application state - shared across all handlers.

use inkpost_core::PostService;

/// Shared application state. The service is built once in `main` with its
/// store and mail dependencies injected; handlers never reach past it.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}
