//! HTTP handlers for the relay.
//!
//! The surface is three routes: `GET /messages` (poll), `POST /newmessage`
//! (append), and `GET /` (static page). Handlers are thin translations
//! from HTTP to allocator/store calls; any failure maps to a 500 with a
//! plain-text body.

pub mod messages;

use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::server::AppState;

/// Build the relay router.
///
/// `index_path` is the static page served at `/`.
pub fn router<P: AsRef<Path>>(state: AppState, index_path: P) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(index_path.as_ref()))
        .route("/messages", get(messages::fetch_messages))
        .route("/newmessage", post(messages::post_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
