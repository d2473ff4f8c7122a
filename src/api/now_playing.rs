use axum::{extract::State, http::HeaderMap, response::Response};
use tracing::error;

use super::AppState;
use crate::{management::NowPlayingManager, response};

pub async fn now_playing(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cors = state.cors(&headers);

    match NowPlayingManager::new(state.api.as_ref()).current_track().await {
        Ok(snapshot) => response::snapshot(&snapshot, &cors),
        Err(e) => {
            error!(error = %e, "failed to build now-playing response");
            response::failure(&e, &cors)
        }
    }
}
