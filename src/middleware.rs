//! Response middleware

use axum::{extract::State, http::StatusCode, response::Response};

use crate::{error::ErrorKind, state::AppState};

/// Rewrite Conflict and Validation failures to 404 when the historical
/// status mapping is enabled. The JSON `kind` in the body is left as is.
pub async fn legacy_status_codes(State(state): State<AppState>, mut response: Response) -> Response {
    if !state.config.legacy_status_codes {
        return response;
    }

    if let Some(kind) = response.extensions().get::<ErrorKind>().copied() {
        if matches!(kind, ErrorKind::Conflict | ErrorKind::Validation) {
            tracing::debug!(kind = ?kind, "Applying legacy 404 status");
            *response.status_mut() = StatusCode::NOT_FOUND;
        }
    }

    response
}
