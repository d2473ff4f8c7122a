use axum::{extract::State, http::HeaderMap, response::Response};
use tracing::error;

use super::AppState;
use crate::{management, response, types::TopTracks};

pub async fn top_tracks(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cors = state.cors(&headers);

    match management::top_tracks(state.api.as_ref()).await {
        Ok(tracks) => response::top_tracks(&TopTracks { tracks }, &cors),
        Err(e) => {
            error!(error = %e, "failed to load top tracks");
            response::failure(&e, &cors)
        }
    }
}
