use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    routing::{MethodRouter, get},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    Res,
    api::{self, AppState},
    config::Config,
    spotify::SpotifyClient,
};

/// `GET` + pre-flight, everything else answered with 405.
fn read_only(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route
        .options(api::preflight)
        .fallback(api::method_not_allowed)
}

/// Builds the full router. Data routes are served both bare and under `/v1`.
pub fn app(state: AppState) -> Router {
    let data = Router::new()
        .route("/now-playing", read_only(get(api::now_playing)))
        .route("/top-tracks", read_only(get(api::top_tracks)));

    Router::new()
        .route("/", get(api::info))
        .route("/health", get(api::health))
        .merge(data.clone())
        .nest("/v1", data)
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", config.server_addr, e))?;

    let client = SpotifyClient::new(config.spotify.clone())?;
    let state = AppState::new(Arc::new(client), config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
