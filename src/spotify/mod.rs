//! # Spotify Integration Module
//!
//! Thin, authenticated access to the handful of Spotify Web API endpoints the
//! service proxies. Nothing here interprets payloads: every data call hands
//! back a [`RawResponse`] (status + body) so callers can branch on the status
//! before decoding.
//!
//! ## Architecture
//!
//! ```text
//! Management Layer (NowPlayingManager, ArtistEnricher, top tracks)
//!          ↓
//! SpotifyApi trait  ← fakes plug in here for tests
//!          ↓
//! SpotifyClient (reqwest)
//!     ├── auth     POST /api/token            (refresh-token grant)
//!     ├── player   GET  /me/player/currently-playing
//!     ├── artists  GET  /artists/{id}
//!     └── tracks   GET  /me/top/tracks
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Error Handling
//!
//! - Token exchange problems surface as [`Error::UpstreamAuth`].
//! - Transport failures surface as [`Error::UpstreamUnavailable`].
//! - No call is retried here; retry policy belongs to the caller.

pub mod artists;
pub mod auth;
pub mod player;
pub mod tracks;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{config::SpotifyConfig, error::Error, types::Credential};

/// Status and undecoded body of an upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

pub type RawPlaybackResult = RawResponse;
pub type RawArtistResult = RawResponse;
pub type RawTopTracksResult = RawResponse;

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decodes the body, failing with [`Error::Pipeline`] on shape mismatch.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, Error> {
        let status = response.status();
        let body = response.text().await?;
        Ok(Self { status, body })
    }
}

/// The upstream operations the now-playing pipeline depends on.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Exchanges the long-lived refresh token for a bearer credential.
    async fn acquire_credential(&self) -> Result<Credential, Error>;

    async fn fetch_now_playing(&self, credential: &Credential) -> Result<RawPlaybackResult, Error>;

    async fn fetch_artist(
        &self,
        credential: &Credential,
        artist_id: &str,
    ) -> Result<RawArtistResult, Error>;

    async fn fetch_top_tracks(&self, credential: &Credential)
    -> Result<RawTopTracksResult, Error>;
}

/// reqwest-backed [`SpotifyApi`] implementation.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: SpotifyConfig,
}

impl SpotifyClient {
    pub fn new(config: SpotifyConfig) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{base}/{path}",
            base = self.config.api_url.trim_end_matches('/'),
            path = path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn acquire_credential(&self) -> Result<Credential, Error> {
        self.exchange_refresh_token().await
    }

    async fn fetch_now_playing(&self, credential: &Credential) -> Result<RawPlaybackResult, Error> {
        self.currently_playing(credential).await
    }

    async fn fetch_artist(
        &self,
        credential: &Credential,
        artist_id: &str,
    ) -> Result<RawArtistResult, Error> {
        self.artist(credential, artist_id).await
    }

    async fn fetch_top_tracks(
        &self,
        credential: &Credential,
    ) -> Result<RawTopTracksResult, Error> {
        self.top_tracks(credential).await
    }
}
