//! Rating log download
//!
//! Serializes the accumulated log as a CSV attachment. Works both as the
//! manual "save progress" action and as the automatic download the page
//! triggers when the final image is rated.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::info;

use imrate_common::{export, time};

use crate::api::ApiError;
use crate::AppState;

/// GET /api/export
///
/// 204 when nothing has been rated yet. The log is left untouched either
/// way; repeated calls re-serialize the full log under fresh filenames.
pub async fn export_csv(State(state): State<AppState>) -> Result<Response, ApiError> {
    let slot = state.session.lock().await;
    let session = slot.as_ref().ok_or(ApiError::NoSession)?;

    match export::export_csv(session.rater(), session.log(), &time::now())? {
        Some(csv) => {
            info!(
                session_id = %session.session_id(),
                filename = %csv.filename,
                rows = session.log().len(),
                "ratings exported"
            );
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", csv.filename),
                    ),
                ],
                csv.data,
            )
                .into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
