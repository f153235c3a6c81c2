//! imrate-ui library - survey web service
//!
//! Serves the rating survey page and the JSON API behind it: one request
//! per operator action, all acting on a single shared session slot.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use imrate_common::session::Session;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The single active session; created by the first begin request and
    /// held until the process exits
    pub session: Arc<Mutex<Option<Session>>>,
    /// Directory scanned for images when a session begins
    pub images_dir: PathBuf,
}

impl AppState {
    /// Create new application state with no active session
    pub fn new(images_dir: PathBuf) -> Self {
        Self {
            session: Arc::new(Mutex::new(None)),
            images_dir,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/session", post(api::begin_session).get(api::get_session))
        .route("/api/session/rating", post(api::submit_rating))
        .route("/api/session/back", post(api::go_back))
        .route("/api/image/current", get(api::current_image))
        .route("/api/export", get(api::export_csv))
        .route("/api/build_info", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
