//! Session begin and status handlers
//!
//! The rater name gates everything: until a begin request succeeds, the
//! other session operations answer 409 and the page shows the name-entry
//! flow.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use imrate_common::catalog::ImageCatalog;
use imrate_common::session::Session;

use crate::api::ApiError;
use crate::AppState;

/// POST /api/session request body
#[derive(Debug, Deserialize)]
pub struct BeginSessionRequest {
    pub rater_name: String,
}

/// Session state as shown to the survey page
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rater: Option<String>,
    /// 0-based position; equals `total` once the session is complete
    pub position: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_image: Option<String>,
    /// Fraction of the catalog already passed, for the progress bar
    pub progress: f64,
    /// Number of records in the rating log
    pub records: usize,
    pub completed: bool,
}

impl SessionView {
    /// View for the no-session state
    pub fn inactive() -> SessionView {
        SessionView {
            active: false,
            session_id: None,
            rater: None,
            position: 0,
            total: 0,
            current_image: None,
            progress: 0.0,
            records: 0,
            completed: false,
        }
    }

    /// Snapshot of an active session
    pub fn of(session: &Session) -> SessionView {
        SessionView {
            active: true,
            session_id: Some(session.session_id().to_string()),
            rater: Some(session.rater().to_string()),
            position: session.position(),
            total: session.catalog().len(),
            current_image: session.current_image().map(str::to_string),
            progress: session.progress(),
            records: session.log().len(),
            completed: session.is_complete(),
        }
    }
}

/// POST /api/session
///
/// Scans the image directory and starts the session for the named rater.
/// Exactly one session per process: a second begin while one is active is
/// rejected rather than re-initializing.
pub async fn begin_session(
    State(state): State<AppState>,
    Json(request): Json<BeginSessionRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let mut slot = state.session.lock().await;
    if slot.is_some() {
        return Err(ApiError::SessionActive);
    }

    let catalog = ImageCatalog::scan(&state.images_dir).map_err(|err| {
        warn!("catalog scan failed: {}", err);
        ApiError::from(err)
    })?;

    let session = Session::begin(&request.rater_name, catalog)?;
    let view = SessionView::of(&session);
    *slot = Some(session);

    Ok(Json(view))
}

/// GET /api/session
///
/// Current session state; the inactive view when no session has begun.
pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    let slot = state.session.lock().await;
    Json(match slot.as_ref() {
        Some(session) => SessionView::of(session),
        None => SessionView::inactive(),
    })
}
