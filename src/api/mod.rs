//! # API Module
//!
//! HTTP endpoints exposed by the now-playing service. Handlers stay thin:
//! they compute the CORS decision for the request, call into
//! [`crate::management`] and hand the result to [`crate::response`].
//!
//! ## Endpoints
//!
//! - [`now_playing`] - `GET /now-playing`, the aggregated current track
//! - [`top_tracks`] - `GET /top-tracks`, long-term favourites
//! - [`preflight`] / [`method_not_allowed`] - `OPTIONS` and every other
//!   method on the two data routes
//! - [`health`] - liveness probe with the crate version
//! - [`info`] / [`not_found`] - static service info and the catch-all
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use nowplaying_api::{api::AppState, server};
//!
//! let app = server::app(AppState::new(api, config));
//! ```

mod health;
mod info;
mod now_playing;
mod top_tracks;

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, response::Response};

use crate::{
    config::Config,
    response::{self, CorsDecision},
    spotify::SpotifyApi,
};

pub use health::health;
pub use info::{info, not_found};
pub use now_playing::now_playing;
pub use top_tracks::top_tracks;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn SpotifyApi>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(api: Arc<dyn SpotifyApi>, config: Config) -> Self {
        Self {
            api,
            config: Arc::new(config),
        }
    }

    pub fn cors(&self, headers: &HeaderMap) -> CorsDecision {
        CorsDecision::from_headers(headers, &self.config.cors)
    }
}

pub async fn preflight(State(state): State<AppState>, headers: HeaderMap) -> Response {
    response::preflight(&state.cors(&headers))
}

pub async fn method_not_allowed(State(state): State<AppState>, headers: HeaderMap) -> Response {
    response::method_not_allowed(&state.cors(&headers))
}
