//! Route definitions
//!
//! - `POST /shorten` - creates a short URL
//! - `GET /{short_id}` - redirects to the original URL
//!
//! Anything else gets the JSON not-found body.

use axum::routing::{get, post};
use axum::Router;

use crate::handler::{not_found, resolve_url, shorten_url};
use crate::state::AppState;

/// Builds the router with the shared application state
///
/// ```no_run
/// # use std::sync::Arc;
/// # use shortlink::database::{init_db, RedbStore};
/// # use shortlink::generator::UuidGenerator;
/// # use shortlink::route::create_app;
/// # use shortlink::service::MappingService;
/// # use shortlink::state::AppState;
/// let db = init_db("data.db", "url_mappings").unwrap();
/// let store = RedbStore::new(Arc::new(db), "url_mappings");
/// let service = MappingService::new(Arc::new(store), Arc::new(UuidGenerator));
/// let app = create_app(AppState::new(service));
/// ```
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_url))
        .route("/{short_id}", get(resolve_url))
        .fallback(not_found)
        .with_state(state)
}
