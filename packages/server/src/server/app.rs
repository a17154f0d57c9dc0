//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use sha2::{Digest, Sha512};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::Key, MemoryStore, SessionManagerLayer};

use crate::kernel::BasePageChecker;
use crate::server::routes::{
    create_check_handler, create_url_handler, health_handler, index_handler, list_urls_handler,
    show_url_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub page_checker: Arc<dyn BasePageChecker>,
}

/// Expand the configured secret into the 64-byte key used to sign session cookies
pub fn session_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Build the Axum application router
///
/// Flash messages live in an in-memory session store; the session id cookie is
/// signed with `secret_key`.
pub fn build_app(
    pool: PgPool,
    page_checker: Arc<dyn BasePageChecker>,
    secret_key: &str,
) -> Router {
    let app_state = AppState {
        db_pool: pool,
        page_checker,
    };

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_signed(session_key(secret_key));

    Router::new()
        .route("/", get(index_handler))
        .route("/urls", get(list_urls_handler).post(create_url_handler))
        .route("/urls/:id", get(show_url_handler))
        .route("/urls/:id/checks", post(create_check_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(session_layer)
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
}
