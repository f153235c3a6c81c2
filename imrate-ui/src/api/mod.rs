//! HTTP API handlers for imrate-ui

pub mod buildinfo;
pub mod export;
pub mod health;
pub mod image;
pub mod rating;
pub mod session;
pub mod ui;

pub use buildinfo::get_build_info;
pub use export::export_csv;
pub use health::health_routes;
pub use image::current_image;
pub use rating::{go_back, submit_rating};
pub use session::{begin_session, get_session};
pub use ui::{serve_app_js, serve_index};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// API error surfaced to the survey page as a JSON `{"error": ...}` body
#[derive(Debug)]
pub enum ApiError {
    /// An operation needed a session and none has begun
    NoSession,
    /// Begin was called while a session is already active
    SessionActive,
    /// Malformed or out-of-range request input
    BadRequest(String),
    /// Missing directory, image, or other resource
    NotFound(String),
    /// Asset read or serialization failure
    Internal(String),
}

impl From<imrate_common::Error> for ApiError {
    fn from(err: imrate_common::Error) -> Self {
        use imrate_common::Error;
        match err {
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::Config(msg) => ApiError::Internal(msg),
            Error::Io(err) => ApiError::Internal(err.to_string()),
            Error::Csv(err) => ApiError::Internal(err.to_string()),
            Error::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NoSession => (
                StatusCode::CONFLICT,
                "no active session; enter a rater name to begin".to_string(),
            ),
            ApiError::SessionActive => (
                StatusCode::CONFLICT,
                "a session is already active".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
