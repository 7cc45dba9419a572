//! HTTP service for rolodeck.
//!
//! Exposes the contact collection as a small REST API and serves the
//! embedded browser client. Handlers depend only on the [`ContactStore`]
//! trait, injected as shared state, so the storage backend can be swapped
//! without touching them.

pub mod handlers;
pub mod ui;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::storage::ContactStore;

/// Shared handler state: the injected contact store.
pub type AppState = Arc<dyn ContactStore>;

/// Build the application router over the given store.
///
/// Routes:
/// - `GET /contacts`, `POST /contacts`
/// - `GET|PUT|DELETE /contacts/:id`
/// - `GET /` and `/assets/*` for the browser client
///
/// Cross-origin requests are permitted from any origin.
#[must_use]
pub fn router(store: AppState) -> Router {
    Router::new()
        .route(
            "/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/contacts/:id",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route("/", get(ui::index))
        .route("/assets/app.js", get(ui::app_js))
        .route("/assets/style.css", get(ui::style_css))
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Serve the contact API and browser client until interrupted.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
/// while running.
pub async fn serve(addr: SocketAddr, store: AppState) -> Result<()> {
    let app = router(store);

    debug!("binding {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolve once ctrl-c is received.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
