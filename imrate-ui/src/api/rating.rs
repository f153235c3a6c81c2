//! Rating capture and navigation handlers
//!
//! Each handler is one discrete operator action against the session state
//! machine; the response is the new session state, fully settled before
//! the next request is accepted.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use imrate_common::rating::AspectScores;
use imrate_common::session::Advance;
use imrate_common::time;

use crate::api::session::SessionView;
use crate::api::ApiError;
use crate::AppState;

/// Response to a rating submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    #[serde(flatten)]
    pub session: SessionView,
    /// True exactly when this submission rated the final image; the page
    /// reacts by fetching /api/export
    pub export_ready: bool,
}

/// POST /api/session/rating
///
/// Records the four aspect scores for the current image and advances.
/// Out-of-range scores are rejected during deserialization, before any
/// state changes.
pub async fn submit_rating(
    State(state): State<AppState>,
    Json(scores): Json<AspectScores>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let mut slot = state.session.lock().await;
    let session = slot.as_mut().ok_or(ApiError::NoSession)?;

    let advance = session.submit(scores, time::now())?;

    Ok(Json(SubmitResponse {
        session: SessionView::of(session),
        export_ready: advance == Advance::Completed,
    }))
}

/// POST /api/session/back
///
/// Steps back one image. A no-op at the first image, never an error.
pub async fn go_back(State(state): State<AppState>) -> Result<Json<SessionView>, ApiError> {
    let mut slot = state.session.lock().await;
    let session = slot.as_mut().ok_or(ApiError::NoSession)?;

    session.back();

    Ok(Json(SessionView::of(session)))
}
