//! Current image serving
//!
//! Streams the bytes of the image at the session's current position. The
//! file handle lives only for the read; a failed read reports an asset
//! error and leaves session state untouched, so the operator can navigate
//! away from a broken file.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::api::ApiError;
use crate::AppState;

/// GET /api/image/current
pub async fn current_image(State(state): State<AppState>) -> Result<Response, ApiError> {
    // Resolve the path under the lock, read after releasing it.
    let (path, name) = {
        let slot = state.session.lock().await;
        let session = slot.as_ref().ok_or(ApiError::NoSession)?;
        let name = session
            .current_image()
            .ok_or_else(|| ApiError::NotFound("all images are already rated".to_string()))?;
        let path = session
            .catalog()
            .path_of(name)
            .ok_or_else(|| ApiError::NotFound(format!("{} is not in the catalog", name)))?;
        (path, name.to_string())
    };

    let bytes = tokio::fs::read(&path).await.map_err(|err| {
        error!("failed to read image {}: {}", path.display(), err);
        ApiError::Internal(format!("error loading image {}: {}", name, err))
    })?;

    Ok((
        StatusCode::OK,
        [("content-type", content_type(&name))],
        bytes,
    )
        .into_response())
}

/// Content type from the catalog's allowed extensions
fn content_type(name: &str) -> &'static str {
    if name.to_ascii_lowercase().ends_with(".png") {
        "image/png"
    } else {
        "image/jpeg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type("a.png"), "image/png");
        assert_eq!(content_type("A.PNG"), "image/png");
        assert_eq!(content_type("a.jpg"), "image/jpeg");
        assert_eq!(content_type("a.jpeg"), "image/jpeg");
    }
}
